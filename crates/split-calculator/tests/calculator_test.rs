use proptest::prelude::*;
use split_calculator::{AllocationSession, Calculator, Catalog, calculate};

fn assert_split(salary: f64, method_id: &str, expected: &[(f64, &str)]) {
    let method = Catalog::builtin().find_method(method_id);
    let result = calculate(salary, method).expect("salary is valid");

    assert_eq!(result.len(), expected.len());
    for (allocation, (amount, label)) in result.iter().zip(expected) {
        assert_eq!(allocation.label, *label);
        assert!(
            (allocation.amount - amount).abs() < 1e-9,
            "{}: got {}, expected {amount}",
            label,
            allocation.amount
        );
    }
}

#[test]
fn fifty_thirty_twenty_split() {
    assert_split(
        10_000.0,
        "50/30/20",
        &[
            (5000.0, "Besoins essentiels"),
            (3000.0, "Désirs personnels"),
            (2000.0, "Épargne et remboursement des dettes"),
        ],
    );
}

#[test]
fn pareto_split() {
    assert_split(1000.0, "80/20", &[(800.0, "Dépenses courantes"), (200.0, "Épargne")]);
}

#[test]
fn single_bucket_methods_return_full_salary() {
    assert_split(4321.5, "Zero-based", &[(4321.5, "Budget total à allouer")]);
    assert_split(4321.5, "Enveloppes", &[(4321.5, "À répartir manuellement")]);
}

#[test]
fn result_records_salary_and_method() {
    let result = calculate(2500.0, Catalog::builtin().find_method("Jars")).unwrap();
    assert_eq!(result.method_id, "Jars");
    assert_eq!(result.salary, 2500.0);
}

#[test]
fn invalid_salaries_produce_no_result() {
    let method = Catalog::builtin().default_method();
    for salary in [0.0, -5.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert!(calculate(salary, method).is_none(), "{salary} produced a result");
    }
}

#[test]
fn calculator_by_id_matches_free_function() {
    let calculator = Calculator::new(Catalog::builtin());
    let by_id = calculator.calculate_by_id(3000.0, "70/20/10");
    let direct = calculate(3000.0, Catalog::builtin().find_method("70/20/10"));
    assert_eq!(by_id, direct);
}

#[test]
fn session_round_trip_through_every_method() {
    let catalog = Catalog::builtin();
    let mut session = AllocationSession::new(catalog);
    session.set_salary(Some(1234.0));

    for method in catalog.list_methods() {
        session.select_method(&method.id);
        assert!(session.submit());
        let result = session.result().unwrap();
        assert_eq!(result.method_id, method.id);
        assert!((result.total() - 1234.0).abs() < 1e-9);
    }
}

fn method_index() -> impl Strategy<Value = usize> {
    0..Catalog::builtin().len()
}

proptest! {
    #[test]
    fn amounts_sum_to_salary(salary in 0.01f64..1.0e9, index in method_index()) {
        let method = &Catalog::builtin().list_methods()[index];
        let result = calculate(salary, method).unwrap();
        let tolerance = salary * 1e-12 + 1e-9;
        prop_assert!((result.total() - salary).abs() <= tolerance);
    }

    #[test]
    fn result_order_matches_share_order(salary in 0.01f64..1.0e9, index in method_index()) {
        let method = &Catalog::builtin().list_methods()[index];
        let result = calculate(salary, method).unwrap();
        let labels: Vec<&str> = result.iter().map(|a| a.label.as_str()).collect();
        let expected: Vec<&str> = method.shares.iter().map(|s| s.label.as_str()).collect();
        prop_assert_eq!(labels, expected);
        prop_assert!(result.iter().all(|a| a.amount > 0.0));
    }

    #[test]
    fn calculate_is_idempotent(salary in 0.01f64..1.0e9, index in method_index()) {
        let method = &Catalog::builtin().list_methods()[index];
        prop_assert_eq!(calculate(salary, method), calculate(salary, method));
    }

    #[test]
    fn non_positive_salary_is_ignored(salary in -1.0e9f64..=0.0, index in method_index()) {
        let method = &Catalog::builtin().list_methods()[index];
        prop_assert!(calculate(salary, method).is_none());
    }
}
