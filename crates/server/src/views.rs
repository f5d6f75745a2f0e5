//! Conversions between engine values and wire types.

use api_types::{
    Method,
    calculation::{CalculationView, PersonView},
    share,
};
use engine::{CalculationResult, DivisionMethod, PersonResult, ShareData};

pub(crate) fn method_to_api(method: DivisionMethod) -> Method {
    match method {
        DivisionMethod::Proportional => Method::Proportional,
        DivisionMethod::Adjusted => Method::Adjusted,
        DivisionMethod::Hybrid => Method::Hybrid,
        DivisionMethod::Equal => Method::Equal,
    }
}

pub(crate) fn method_from_api(method: Method) -> DivisionMethod {
    match method {
        Method::Proportional => DivisionMethod::Proportional,
        Method::Adjusted => DivisionMethod::Adjusted,
        Method::Hybrid => DivisionMethod::Hybrid,
        Method::Equal => DivisionMethod::Equal,
    }
}

fn person_view(person: &PersonResult) -> PersonView {
    PersonView {
        contribution: person.contribution,
        expense_percentage: person.expense_percentage,
        income_percentage: person.income_percentage,
        remaining: person.remaining,
        housework_value: person.housework_value,
    }
}

pub(crate) fn calculation_view(result: &CalculationResult) -> CalculationView {
    CalculationView {
        person_a: person_view(&result.person_a),
        person_b: person_view(&result.person_b),
        method: method_to_api(result.method),
    }
}

pub(crate) fn share_data_to_api(data: ShareData) -> share::ShareData {
    share::ShareData {
        name_a: data.name_a,
        income_a: data.income_a,
        name_b: data.name_b,
        income_b: data.income_b,
        expenses: data.expenses,
        housework_a: data.housework_a,
        housework_b: data.housework_b,
    }
}

pub(crate) fn share_data_from_api(data: share::ShareData) -> ShareData {
    ShareData {
        name_a: data.name_a,
        income_a: data.income_a,
        name_b: data.name_b,
        income_b: data.income_b,
        expenses: data.expenses,
        housework_a: data.housework_a,
        housework_b: data.housework_b,
    }
}
