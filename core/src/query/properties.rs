use crate::dataset::{distinct_sites, payload_domain, Dataset, LaunchRecord, Outcome};
use crate::query::{
    compute_scatter_points, compute_success_aggregate, PayloadRange, ScatterPoint, SiteSelection,
    SuccessAggregate,
};
use proptest::prelude::*;

const SITES: [&str; 4] = ["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"];
const BOOSTERS: [&str; 5] = ["v1.0", "v1.1", "FT", "B4", "B5"];

prop_compose! {
    // Coarse payload steps so degenerate ranges hit repeated values.
    fn arb_record()(
        site in 0..SITES.len(),
        step in 0u32..40,
        success in any::<bool>(),
        booster in 0..BOOSTERS.len(),
    ) -> LaunchRecord {
        let outcome = if success { Outcome::Success } else { Outcome::Failure };
        LaunchRecord::new(SITES[site], f64::from(step) * 250.0, outcome, BOOSTERS[booster])
    }
}

prop_compose! {
    fn arb_dataset(max_rows: usize)(
        records in prop::collection::vec(arb_record(), 1..max_rows),
    ) -> Dataset {
        Dataset::from_records(records).expect("generated records are valid")
    }
}

fn arb_selection() -> impl Strategy<Value = SiteSelection> {
    prop_oneof![
        Just(SiteSelection::All),
        Just(SiteSelection::parse("Boca Chica")),
        prop::sample::select(SITES.to_vec()).prop_map(SiteSelection::parse),
    ]
}

fn arb_range() -> impl Strategy<Value = PayloadRange> {
    (0u32..40, 0u32..20).prop_map(|(start, width)| {
        let low = f64::from(start) * 250.0;
        PayloadRange::new(low, low + f64::from(width) * 250.0)
    })
}

/// True when `points` can be obtained from `records` by deleting elements.
fn is_subsequence(points: &[ScatterPoint], records: &[LaunchRecord]) -> bool {
    let mut remaining = records.iter().map(ScatterPoint::from);
    points
        .iter()
        .all(|point| remaining.by_ref().any(|candidate| &candidate == point))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn all_sites_aggregate_covers_every_site_and_every_success(dataset in arb_dataset(64)) {
        let aggregate = compute_success_aggregate(&dataset, &SiteSelection::All);

        let groups = match &aggregate {
            SuccessAggregate::BySite(groups) => groups,
            SuccessAggregate::ByOutcome(_) => panic!("expected per-site groups"),
        };
        let keys: Vec<String> = groups.iter().map(|g| g.site.clone()).collect();
        prop_assert_eq!(keys, distinct_sites(&dataset));

        let successes = dataset.iter().filter(|r| r.outcome.is_success()).count() as u64;
        prop_assert_eq!(aggregate.total(), successes);
    }

    #[test]
    fn single_site_aggregate_counts_every_launch_at_site(dataset in arb_dataset(48)) {
        for site in distinct_sites(&dataset) {
            let aggregate =
                compute_success_aggregate(&dataset, &SiteSelection::Site(site.clone()));
            let launches = dataset.iter().filter(|r| r.site == site).count() as u64;
            prop_assert_eq!(aggregate.total(), launches);
        }
    }

    #[test]
    fn scatter_points_respect_filters_and_order(
        dataset in arb_dataset(80),
        selection in arb_selection(),
        range in arb_range(),
    ) {
        let points = compute_scatter_points(&dataset, &selection, &range);
        prop_assert!(is_subsequence(&points, dataset.records()));
        prop_assert!(points.iter().all(|p| range.contains(p.payload_mass_kg)));

        let expected = dataset
            .iter()
            .filter(|r| selection.matches(&r.site) && range.contains(r.payload_mass_kg))
            .count();
        prop_assert_eq!(points.len(), expected);
    }

    #[test]
    fn boundary_ranges_select_whole_site_or_exact_value(
        dataset in arb_dataset(40),
        selection in arb_selection(),
        pivot_row in any::<prop::sample::Index>(),
    ) {
        let full = PayloadRange::full(payload_domain(&dataset).expect("dataset is non-empty"));
        let matching = dataset.iter().filter(|r| selection.matches(&r.site)).count();
        prop_assert_eq!(
            compute_scatter_points(&dataset, &selection, &full).len(),
            matching
        );

        let pivot = dataset.records()[pivot_row.index(dataset.len())].payload_mass_kg;
        let exact = compute_scatter_points(
            &dataset,
            &SiteSelection::All,
            &PayloadRange::new(pivot, pivot),
        );
        let expected = dataset.iter().filter(|r| r.payload_mass_kg == pivot).count();
        prop_assert_eq!(exact.len(), expected);
        prop_assert!(exact.iter().all(|p| p.payload_mass_kg == pivot));
    }

    #[test]
    fn repeated_queries_return_identical_results(
        dataset in arb_dataset(50),
        selection in arb_selection(),
        range in arb_range(),
    ) {
        prop_assert_eq!(
            compute_success_aggregate(&dataset, &selection),
            compute_success_aggregate(&dataset, &selection)
        );
        prop_assert_eq!(
            compute_scatter_points(&dataset, &selection, &range),
            compute_scatter_points(&dataset, &selection, &range)
        );
    }
}
