//! Order filter pipeline: access scope, then free text, then date range,
//! then every categorical multi-select (logical AND).

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::fields::OrderField;
use crate::shared::dates::{parse_record_date, DateRange};
use crate::shared::field::LogicalField;
use crate::shared::record::{searchable_text, Record};
use crate::system::auth::access::AccessContext;
use crate::system::auth::scope_filter::apply_access_filter;

/// Selection value standing for "empty / missing".
pub const EMPTY_OPTION: &str = "__EMPTY__";
/// Label shown for [`EMPTY_OPTION`].
pub const EMPTY_LABEL: &str = "Trống";

/// The multi-select filters of the orders screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CategoricalFilter {
    SaleRep,
    MarketingRep,
    LogisticsRep,
    CheckResult,
    DeliveryStatus,
    Product,
    Region,
    PaymentStatus,
}

impl CategoricalFilter {
    pub const ALL: [CategoricalFilter; 8] = [
        CategoricalFilter::SaleRep,
        CategoricalFilter::MarketingRep,
        CategoricalFilter::LogisticsRep,
        CategoricalFilter::CheckResult,
        CategoricalFilter::DeliveryStatus,
        CategoricalFilter::Product,
        CategoricalFilter::Region,
        CategoricalFilter::PaymentStatus,
    ];

    pub fn field(&self) -> OrderField {
        match self {
            CategoricalFilter::SaleRep => OrderField::SaleRep,
            CategoricalFilter::MarketingRep => OrderField::MarketingRep,
            CategoricalFilter::LogisticsRep => OrderField::LogisticsRep,
            CategoricalFilter::CheckResult => OrderField::CheckResult,
            CategoricalFilter::DeliveryStatus => OrderField::DeliveryStatus,
            CategoricalFilter::Product => OrderField::Product,
            CategoricalFilter::Region => OrderField::Region,
            CategoricalFilter::PaymentStatus => OrderField::PaymentStatus,
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            CategoricalFilter::SaleRep => "NV Sale",
            CategoricalFilter::MarketingRep => "NV Marketing",
            CategoricalFilter::LogisticsRep => "NV Vận đơn",
            CategoricalFilter::CheckResult => "Kết quả Check",
            CategoricalFilter::DeliveryStatus => "Trạng thái giao hàng",
            CategoricalFilter::Product => "Mặt hàng",
            CategoricalFilter::Region => "Khu vực",
            CategoricalFilter::PaymentStatus => "Trạng thái thu tiền",
        }
    }

    /// Value a record contributes to this filter: trimmed, or
    /// [`EMPTY_OPTION`] when blank.
    pub fn selection_value(&self, record: &Record) -> String {
        let value = self.field().trimmed(record);
        if value.is_empty() {
            EMPTY_OPTION.to_string()
        } else {
            value
        }
    }
}

/// Display label of an option value.
pub fn option_label(value: &str) -> &str {
    if value.is_empty() || value == EMPTY_OPTION {
        EMPTY_LABEL
    } else {
        value
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderFilter {
    pub search: String,
    pub dates: DateRange,
    selections: BTreeMap<CategoricalFilter, BTreeSet<String>>,
}

impl OrderFilter {
    pub fn selection(&self, filter: CategoricalFilter) -> Vec<String> {
        self.selections
            .get(&filter)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn is_selected(&self, filter: CategoricalFilter, value: &str) -> bool {
        self.selections
            .get(&filter)
            .is_some_and(|set| set.contains(value))
    }

    pub fn set_selection<I>(&mut self, filter: CategoricalFilter, values: I)
    where
        I: IntoIterator<Item = String>,
    {
        let set: BTreeSet<String> = values.into_iter().collect();
        if set.is_empty() {
            self.selections.remove(&filter);
        } else {
            self.selections.insert(filter, set);
        }
    }

    pub fn toggle(&mut self, filter: CategoricalFilter, value: &str) {
        let set = self.selections.entry(filter).or_default();
        if !set.remove(value) {
            set.insert(value.to_string());
        }
        if set.is_empty() {
            self.selections.remove(&filter);
        }
    }

    pub fn clear(&mut self, filter: CategoricalFilter) {
        self.selections.remove(&filter);
    }

    fn matches_search(&self, record: &Record) -> bool {
        if self.search.is_empty() {
            return true;
        }
        searchable_text(record).contains(&self.search.to_lowercase())
    }

    fn matches_dates(&self, record: &Record) -> bool {
        if !self.dates.is_active() {
            return true;
        }
        self.dates
            .contains(parse_record_date(OrderField::OrderDate.value(record)))
    }

    fn matches_selections(&self, record: &Record) -> bool {
        self.selections
            .iter()
            .all(|(filter, selected)| selected.is_empty() || selected.contains(&filter.selection_value(record)))
    }

    pub fn matches(&self, record: &Record) -> bool {
        self.matches_search(record) && self.matches_dates(record) && self.matches_selections(record)
    }

    pub fn apply<'a>(&self, records: &[&'a Record]) -> Vec<&'a Record> {
        records.iter().copied().filter(|r| self.matches(r)).collect()
    }
}

/// Full pipeline: the access scope first, then the user's filters.
pub fn filter_orders<'a>(
    records: &'a [Record],
    access: &AccessContext,
    filter: &OrderFilter,
) -> Vec<&'a Record> {
    let scoped = apply_access_filter(records, access);
    filter.apply(&scoped)
}
