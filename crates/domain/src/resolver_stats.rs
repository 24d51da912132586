use std::collections::BTreeMap;
use std::fmt;

/// Counters and gauges the local resolver exposes through its CHAOS-class
/// TXT stats interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ResolverMetric {
    CacheSize,
    CacheInsertions,
    CacheEvictions,
    CacheMisses,
    CacheHits,
}

impl ResolverMetric {
    pub const ALL: [ResolverMetric; 5] = [
        ResolverMetric::CacheSize,
        ResolverMetric::CacheInsertions,
        ResolverMetric::CacheEvictions,
        ResolverMetric::CacheMisses,
        ResolverMetric::CacheHits,
    ];

    /// Question name used to read the value from dnsmasq.
    pub fn query_name(&self) -> &'static str {
        match self {
            ResolverMetric::CacheSize => "cachesize.bind.",
            ResolverMetric::CacheInsertions => "insertions.bind.",
            ResolverMetric::CacheEvictions => "evictions.bind.",
            ResolverMetric::CacheMisses => "misses.bind.",
            ResolverMetric::CacheHits => "hits.bind.",
        }
    }

    /// Exported metric name, without namespace and subsystem.
    pub fn metric_name(&self) -> &'static str {
        match self {
            ResolverMetric::CacheSize => "max_size",
            ResolverMetric::CacheInsertions => "insertions",
            ResolverMetric::CacheEvictions => "evictions",
            ResolverMetric::CacheMisses => "misses",
            ResolverMetric::CacheHits => "hits",
        }
    }

    pub fn help(&self) -> &'static str {
        match self {
            ResolverMetric::CacheSize => "Maximum size of the DNS cache",
            ResolverMetric::CacheInsertions => "Number of DNS cache insertions",
            ResolverMetric::CacheEvictions => "Number of DNS cache evictions",
            ResolverMetric::CacheMisses => "Number of DNS cache misses",
            ResolverMetric::CacheHits => "Number of DNS cache hits",
        }
    }

    pub fn from_query_name(name: &str) -> Option<Self> {
        let name = name.to_ascii_lowercase();
        let name = if name.ends_with('.') {
            name
        } else {
            format!("{}.", name)
        };
        Self::ALL.into_iter().find(|m| m.query_name() == name)
    }
}

impl fmt::Display for ResolverMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.metric_name())
    }
}

/// One poll's worth of resolver statistics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolverStats {
    values: BTreeMap<ResolverMetric, f64>,
}

impl ResolverStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, metric: ResolverMetric, value: f64) {
        self.values.insert(metric, value);
    }

    pub fn get(&self, metric: ResolverMetric) -> Option<f64> {
        self.values.get(&metric).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ResolverMetric, f64)> + '_ {
        self.values.iter().map(|(m, v)| (*m, *v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<(ResolverMetric, f64)> for ResolverStats {
    fn from_iter<I: IntoIterator<Item = (ResolverMetric, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
