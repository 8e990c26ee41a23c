use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct Metrics {
    catalog_fetches: AtomicU64,
    catalog_fetch_errors: AtomicU64,
    item_lookups: AtomicU64,
    item_lookup_misses: AtomicU64,
    equips_applied: AtomicU64,
}

impl Metrics {
    pub fn record_fetch(&self) {
        self.catalog_fetches.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_fetch_error(&self) {
        self.catalog_fetch_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_lookup(&self, hit: bool) {
        self.item_lookups.fetch_add(1, Ordering::Relaxed);
        if !hit {
            self.item_lookup_misses.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn record_equips(&self, count: usize) {
        self.equips_applied.fetch_add(count as u64, Ordering::Relaxed);
    }

    pub fn render_prometheus(&self) -> String {
        let fetches = self.catalog_fetches.load(Ordering::Relaxed);
        let fetch_errors = self.catalog_fetch_errors.load(Ordering::Relaxed);
        let lookups = self.item_lookups.load(Ordering::Relaxed);
        let misses = self.item_lookup_misses.load(Ordering::Relaxed);
        let equips = self.equips_applied.load(Ordering::Relaxed);

        format!(
            "# TYPE marionette_catalog_fetches_total counter\n\
marionette_catalog_fetches_total {}\n\
# TYPE marionette_catalog_fetch_errors_total counter\n\
marionette_catalog_fetch_errors_total {}\n\
# TYPE marionette_item_lookups_total counter\n\
marionette_item_lookups_total {}\n\
# TYPE marionette_item_lookup_misses_total counter\n\
marionette_item_lookup_misses_total {}\n\
# TYPE marionette_equips_applied_total counter\n\
marionette_equips_applied_total {}\n",
            fetches, fetch_errors, lookups, misses, equips
        )
    }
}
