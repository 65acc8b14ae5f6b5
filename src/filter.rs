//! List Filtering
//!
//! The search-and-select pipeline shared by every page: a case-insensitive
//! search term over designated fields, AND-composed with any number of
//! exact-match predicates. Recomputed synchronously on every keystroke;
//! all collections are resident in memory so there is nothing to debounce
//! or cache.

/// A composable filter over an in-memory collection.
///
/// The term matches when it is a substring (case-insensitive) of at least
/// one searchable field; an empty term matches everything. Additional
/// predicates narrow the result further. Output order is input order and
/// no record is mutated.
pub struct ListFilter<T> {
    term: String,
    predicates: Vec<Box<dyn Fn(&T) -> bool>>,
}

impl<T: Clone> ListFilter<T> {
    pub fn new(term: &str) -> Self {
        Self {
            term: term.to_lowercase(),
            predicates: Vec::new(),
        }
    }

    /// Add an exact-match predicate. All predicates must hold.
    pub fn and(mut self, predicate: impl Fn(&T) -> bool + 'static) -> Self {
        self.predicates.push(Box::new(predicate));
        self
    }

    /// Run the filter, with `fields` designating the searchable fields of
    /// each record.
    pub fn apply<F>(&self, items: &[T], fields: F) -> Vec<T>
    where
        F: Fn(&T) -> Vec<String>,
    {
        items
            .iter()
            .filter(|item| self.matches(*item, &fields))
            .cloned()
            .collect()
    }

    fn matches<F>(&self, item: &T, fields: &F) -> bool
    where
        F: Fn(&T) -> Vec<String>,
    {
        let term_ok = self.term.is_empty()
            || fields(item)
                .iter()
                .any(|f| f.to_lowercase().contains(&self.term));

        term_ok && self.predicates.iter().all(|p| p(item))
    }
}

/// Which filter is responsible for an empty result, so the caller can pick
/// the right empty-state message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmptyReason {
    /// A search term was active and nothing matched it.
    Search,
    /// A date filter was active and nothing matched it.
    Date,
    /// The collection has nothing in it to begin with.
    NoData,
}

/// Classify an empty result. Search takes precedence over the date filter,
/// matching the messaging of the original flow.
pub fn empty_reason(search_active: bool, date_active: bool) -> EmptyReason {
    if search_active {
        EmptyReason::Search
    } else if date_active {
        EmptyReason::Date
    } else {
        EmptyReason::NoData
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;
    use crate::model::{Appointment, Patient, Prescription};

    fn appointment_fields(a: &Appointment) -> Vec<String> {
        vec![a.patient_name.clone(), a.patient_id.to_string(), a.kind.clone()]
    }

    fn patient_fields(p: &Patient) -> Vec<String> {
        vec![p.name.clone()]
    }

    fn prescription_fields(p: &Prescription) -> Vec<String> {
        vec![p.patient.clone(), p.medication.clone()]
    }

    #[test]
    fn test_empty_term_is_identity() {
        let appointments = data::appointments();
        let filtered = ListFilter::new("").apply(&appointments, appointment_fields);
        assert_eq!(filtered, appointments);
    }

    #[test]
    fn test_non_matching_records_are_absent() {
        let appointments = data::appointments();
        let filtered = ListFilter::new("jane").apply(&appointments, appointment_fields);

        for record in &filtered {
            assert!(appointment_fields(record)
                .iter()
                .any(|f| f.to_lowercase().contains("jane")));
        }
        for record in &appointments {
            let matches = appointment_fields(record)
                .iter()
                .any(|f| f.to_lowercase().contains("jane"));
            assert_eq!(matches, filtered.contains(record));
        }
    }

    #[test]
    fn test_order_is_stable() {
        let appointments = data::appointments();
        let filtered = ListFilter::new("o").apply(&appointments, appointment_fields);
        let ids: Vec<u32> = filtered.iter().map(|a| a.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn test_date_and_text_filters_commute() {
        let appointments = data::appointments();
        let day = "2025-05-18";

        let date_then_text = {
            let by_date =
                ListFilter::new("").and(move |a: &Appointment| a.date == day).apply(
                    &appointments,
                    appointment_fields,
                );
            ListFilter::new("check").apply(&by_date, appointment_fields)
        };
        let text_then_date = {
            let by_text = ListFilter::new("check").apply(&appointments, appointment_fields);
            ListFilter::new("").and(move |a: &Appointment| a.date == day).apply(
                &by_text,
                appointment_fields,
            )
        };
        let combined = ListFilter::new("check")
            .and(move |a: &Appointment| a.date == day)
            .apply(&appointments, appointment_fields);

        assert_eq!(date_then_text, text_then_date);
        assert_eq!(date_then_text, combined);
    }

    #[test]
    fn test_date_selection_matches_exactly_that_day() {
        let appointments = data::appointments();
        let filtered = ListFilter::new("")
            .and(|a: &Appointment| a.date == "2025-05-17")
            .apply(&appointments, appointment_fields);

        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|a| a.date == "2025-05-17"));
    }

    #[test]
    fn test_search_jane_finds_jane_smith_only() {
        let appointments = data::appointments();
        let filtered = ListFilter::new("Jane").apply(&appointments, appointment_fields);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].patient_name, "Jane Smith");
    }

    #[test]
    fn test_amoxicillin_search_is_case_insensitive() {
        let prescriptions = data::prescriptions();
        for term in ["amoxicillin", "AMOXICILLIN", "AmOxIcIlLiN"] {
            let filtered = ListFilter::new(term).apply(&prescriptions, prescription_fields);
            assert_eq!(filtered.len(), 1);
            assert_eq!(filtered[0].id, 1);
        }
    }

    #[test]
    fn test_no_match_reports_search_empty_state() {
        let patients = data::patients();
        let term = "zzz-no-match";
        let filtered = ListFilter::new(term).apply(&patients, patient_fields);

        assert!(filtered.is_empty());
        assert_eq!(empty_reason(!term.is_empty(), false), EmptyReason::Search);
    }

    #[test]
    fn test_empty_reason_precedence() {
        assert_eq!(empty_reason(true, true), EmptyReason::Search);
        assert_eq!(empty_reason(false, true), EmptyReason::Date);
        assert_eq!(empty_reason(false, false), EmptyReason::NoData);
    }
}
