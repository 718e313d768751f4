//! Culture-aware ordering of employee names.

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions};
use icu_locid::locale;

use crate::models::{Employee, EmployeeProfile};

/// Sorts `employees` by name and then first name in French collation order.
///
/// Case and accents only break ties between names that are otherwise
/// equal; exact byte order is the last resort. The sort is stable.
pub(crate) fn sort_by_full_name(employees: &mut [Employee]) {
    match Collator::try_new(&locale!("fr").into(), CollatorOptions::new()) {
        Ok(collator) => employees.sort_by(|a, b| {
            collator
                .compare(a.name(), b.name())
                .then_with(|| collator.compare(a.first_name(), b.first_name()))
                .then_with(|| ordinal(a, b))
        }),
        // Compiled collation data always covers French.
        Err(_) => employees.sort_by(ordinal),
    }
}

fn ordinal(a: &Employee, b: &Employee) -> Ordering {
    a.name()
        .cmp(b.name())
        .then_with(|| a.first_name().cmp(b.first_name()))
}
