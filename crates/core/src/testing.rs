//! Proptest strategies shared by the unit tests.

use chrono::NaiveDate;
use proptest::prelude::*;

use crate::item::{Item, Status};
use crate::snapshot::{ProjectSnapshot, Sprint};

impl Arbitrary for Status {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            Just(Status::Backlog),
            Just(Status::InProgress),
            Just(Status::Review),
            Just(Status::Done),
        ]
        .boxed()
    }
}

prop_compose! {
    fn arb_item_fields()(
        status in any::<Status>(),
        sprint in proptest::option::of(prop_oneof![Just("S1"), Just("S2"), Just("S3")]),
        day in 1u32..=28,
        progress in proptest::option::of(0u8..=100),
        title in "[a-zA-Z][a-zA-Z0-9 ]{0,20}",
    ) -> (Status, Option<&'static str>, u32, Option<u8>, String) {
        (status, sprint, day, progress, title)
    }
}

prop_compose! {
    /// A valid snapshot of up to 12 items, with some sprints declared.
    pub fn arb_snapshot()(
        fields in proptest::collection::vec(arb_item_fields(), 0..12),
        declared in proptest::sample::subsequence(vec!["S2", "S1", "Later"], 0..=3),
    ) -> ProjectSnapshot {
        let items = fields
            .into_iter()
            .enumerate()
            .map(|(i, (status, sprint, day, progress, title))| {
                let date = NaiveDate::from_ymd_opt(2024, 12, day).unwrap();
                let mut item = Item::new(format!("#{i}"), title, status, date);
                item.sprint = sprint.map(str::to_string);
                item.progress = progress;
                item
            })
            .collect();
        ProjectSnapshot::new("arb", items)
            .unwrap()
            .with_sprints(declared.into_iter().map(Sprint::new).collect())
            .unwrap()
    }
}
