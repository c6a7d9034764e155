/// Read-through caching for an async computation.
///
/// Evaluates to `Ok(value)` from `$cache` when `$key` is present; otherwise
/// awaits `$block`, queues the result for storage with `$ttl` seconds and
/// returns it. Cache and computation errors are propagated with `?`, so the
/// enclosing function must return `AppResult`.
///
/// ```rust,ignore
/// let data: AppResult<AnalyticsData> =
///     cached!(cache, CacheKey::AnalyticsSummary, 60, analytics::summary(store));
/// ```
#[macro_export]
macro_rules! cached {
    ($cache:expr, $key:expr, $ttl:expr, $block:expr) => {{
        if let Some(cached) = $cache.get_from_cache(&$key).await? {
            Ok(cached)
        } else {
            let value = $block.await?;
            $cache.set_in_background(&$key, &value, $ttl);
            Ok(value)
        }
    }};
}
