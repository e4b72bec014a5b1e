mod cards;
pub use cards::SiteCards;

mod compare;
pub use compare::{
    comparison_entries, run_compare, ComparisonEntry, ComparisonModal, ComparisonSelection,
    ToggleOutcome, MAX_COMPARE_SITES, MIN_COMPARE_SITES,
};

mod detail;
pub use detail::SiteDetailPanel;

mod charts;
pub use charts::{layout_bars, Bar, EhiBarChart};

mod export;
pub use export::{to_delimited_text, ExportButton, ExportRow};

mod filter;
pub use filter::{FilterBar, FilterCriteria, CATEGORY_ALL};

mod notify;
pub use notify::{use_notifier, use_notifier_provider, NotificationArea, Notifier, Severity};

mod utils;
pub(crate) use utils::*;
