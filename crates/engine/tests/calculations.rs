use engine::{
    CalculationInput, DivisionMethod, MINIMUM_SHARE_PERCENT, ShareData, ShareParams,
    build_share_url, calculate_adjusted, calculate_all, calculate_proportional,
    parse_share_params_lenient, query_map,
};
use proptest::prelude::*;

/// Mostly household-sized amounts, with the full `i64` range mixed in.
fn amount() -> impl Strategy<Value = i64> {
    prop_oneof![
        4 => 0i64..100_000_000,
        1 => 0i64..=i64::MAX,
        1 => Just(i64::MAX),
    ]
}

fn hours() -> impl Strategy<Value = u32> {
    prop_oneof![
        4 => 0u32..120,
        1 => any::<u32>(),
    ]
}

fn input_strategy() -> impl Strategy<Value = CalculationInput> {
    (amount(), amount(), amount(), hours(), hours(), amount())
        .prop_map(
            |(income_a, income_b, expenses, housework_a, housework_b, minimum_wage)| {
                CalculationInput {
                    income_a,
                    income_b,
                    expenses,
                    housework_a,
                    housework_b,
                    minimum_wage,
                }
            },
        )
}

fn share_strategy() -> impl Strategy<Value = ShareData> {
    (
        "[A-Za-zÀ-ú&?=+# ]{0,20}[A-Za-zÀ-ú]",
        1i64..100_000_000,
        "[A-Za-zÀ-ú&?=+# ]{0,20}[A-Za-zÀ-ú]",
        1i64..100_000_000,
        1i64..50_000_000,
        0u32..120,
        0u32..120,
    )
        .prop_map(
            |(name_a, income_a, name_b, income_b, expenses, housework_a, housework_b)| ShareData {
                name_a: name_a.trim().to_string(),
                income_a,
                name_b: name_b.trim().to_string(),
                income_b,
                expenses,
                housework_a,
                housework_b,
            },
        )
}

proptest! {
    #[test]
    fn contributions_always_sum_to_expenses(input in input_strategy()) {
        for (method, result) in calculate_all(&input) {
            prop_assert_eq!(
                result.person_a.contribution + result.person_b.contribution,
                input.expenses,
                "method {}", method
            );
        }
    }

    #[test]
    fn percentages_stay_in_range(input in input_strategy()) {
        for (_, result) in calculate_all(&input) {
            for person in [result.person_a, result.person_b] {
                prop_assert!((0.0..=100.0).contains(&person.expense_percentage));
                prop_assert!(person.income_percentage >= 0.0);
            }
        }
    }

    #[test]
    fn hybrid_respects_floor(input in input_strategy()) {
        let result = DivisionMethod::Hybrid.calculate(&input);
        let floor = i128::from(input.expenses) * i128::from(MINIMUM_SHARE_PERCENT) / 100;
        prop_assert!(i128::from(result.person_a.contribution) >= floor);
        prop_assert!(i128::from(result.person_b.contribution) >= floor);
    }

    #[test]
    fn share_link_round_trips(data in share_strategy()) {
        let url = build_share_url(&data, "https://rateio.app");
        prop_assert_eq!(url.contains("&ha="), data.housework_a > 0);
        prop_assert_eq!(url.contains("&hb="), data.housework_b > 0);
        prop_assert_eq!(ShareParams::parse_url(&url), Ok(data));
    }
}

#[test]
fn adjusted_diverges_from_proportional_with_asymmetric_housework() {
    let input = CalculationInput {
        income_a: 400_000,
        income_b: 400_000,
        expenses: 300_000,
        housework_a: 5,
        housework_b: 25,
        minimum_wage: 151_800,
    };

    let proportional = calculate_proportional(&input);
    let adjusted = calculate_adjusted(&input);

    assert_eq!(proportional.person_a.contribution, 150_000);
    assert_ne!(
        adjusted.person_a.contribution,
        proportional.person_a.contribution
    );
    assert_eq!(
        adjusted.person_a.contribution + adjusted.person_b.contribution,
        300_000
    );

    // Both still report against raw income.
    for result in [proportional, adjusted] {
        assert_eq!(
            result.person_a.remaining,
            400_000 - result.person_a.contribution
        );
        assert_eq!(
            result.person_b.remaining,
            400_000 - result.person_b.contribution
        );
        assert_eq!(
            result.person_a.income_percentage,
            engine::percent_of(result.person_a.contribution, 400_000)
        );
    }
}

#[test]
fn share_link_feeds_the_calculators() {
    let url = "https://rateio.app/results?a=Ana&ra=500000&b=Bia&rb=300000&e=200000&hb=10";
    let data = ShareParams::parse_url(url).unwrap();
    let input = data.to_input(151_800);

    assert_eq!(input.housework_a, 0);
    assert_eq!(input.housework_b, 10);
    assert_eq!(input.minimum_wage, 151_800);

    let result = DivisionMethod::Adjusted.calculate(&input);
    assert_eq!(result.person_b.housework_value, 27_600);
    assert_eq!(result.method, DivisionMethod::Proportional);
}

#[test]
fn largest_accepted_amounts_still_split_exactly() {
    let link = format!("a=Ana&ra={}&b=Bia&rb=1&e=100&ha=40", i64::MAX);
    let data = ShareParams::parse_query(&link).unwrap();
    assert_eq!(data.income_a, i64::MAX);

    for (method, result) in calculate_all(&data.to_input(151_800)) {
        assert_eq!(
            result.person_a.contribution + result.person_b.contribution,
            100,
            "method {method}"
        );
        assert!(result.person_a.contribution >= 0, "method {method}");
        assert!(result.person_b.contribution >= 0, "method {method}");
    }

    let input = CalculationInput {
        income_a: i64::MAX,
        income_b: i64::MAX,
        expenses: i64::MAX,
        housework_a: u32::MAX,
        housework_b: 0,
        minimum_wage: i64::MAX,
    };
    for (method, result) in calculate_all(&input) {
        assert_eq!(
            result.person_a.contribution + result.person_b.contribution,
            i64::MAX,
            "method {method}"
        );
    }
}

#[test]
fn rejection_set_matches_between_decoders() {
    let bad_links = [
        "a=Ana&ra=-500&b=Bia&rb=300000&e=200000",
        "a=Ana&ra=0&b=Bia&rb=300000&e=200000",
        "a=&ra=500000&b=Bia&rb=300000&e=200000",
        "a=%20%20&ra=500000&b=Bia&rb=300000&e=200000",
        "a=Ana&ra=500000&b=Bia&rb=300000",
    ];

    for link in bad_links {
        assert!(ShareParams::parse_query(link).is_err(), "{link}");
        assert_eq!(parse_share_params_lenient(&query_map(link)), None, "{link}");
    }
}
