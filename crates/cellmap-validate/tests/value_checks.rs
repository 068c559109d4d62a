//! Field value normalization and constraint checking tests.

use cellmap_model::{Constraint, DataType, InputMapping};
use cellmap_validate::{
    FieldValue, FieldValueError, check_field_value, constraint_summary, normalize_field_value,
};

fn make_input(data_type: Option<DataType>, constraints: Option<Constraint>) -> InputMapping {
    InputMapping {
        id: "in-1".to_string(),
        sheet_name: "Budget".to_string(),
        cell_id: "A1".to_string(),
        label: "Amount".to_string(),
        data_type,
        constraints,
    }
}

#[test]
fn numeric_values_parse_and_trim() {
    let mapping = make_input(Some(DataType::Number), None);

    assert_eq!(
        normalize_field_value(&mapping, " 2.5 "),
        Ok(FieldValue::Number(2.5))
    );
    assert_eq!(
        normalize_field_value(&mapping, "1500"),
        Ok(FieldValue::Number(1500.0))
    );
}

#[test]
fn numeric_values_reject_blanks_and_garbage() {
    let mapping = make_input(Some(DataType::Currency), None);

    assert_eq!(
        normalize_field_value(&mapping, ""),
        Err(FieldValueError::NumericRequired)
    );
    assert_eq!(
        normalize_field_value(&mapping, "   "),
        Err(FieldValueError::NumericRequired)
    );
    assert_eq!(
        normalize_field_value(&mapping, "abc"),
        Err(FieldValueError::InvalidNumber)
    );
    assert_eq!(
        normalize_field_value(&mapping, "NaN"),
        Err(FieldValueError::InvalidNumber)
    );
    assert_eq!(
        normalize_field_value(&mapping, "inf"),
        Err(FieldValueError::InvalidNumber)
    );
}

#[test]
fn discrete_selections_require_a_choice() {
    let mapping = make_input(
        Some(DataType::Text),
        Some(Constraint::discrete(["North", "South"])),
    );

    assert_eq!(
        normalize_field_value(&mapping, "  "),
        Err(FieldValueError::SelectionRequired)
    );
    assert_eq!(
        normalize_field_value(&mapping, " North "),
        Ok(FieldValue::Text("North".to_string()))
    );
}

#[test]
fn plain_text_passes_through_trimmed() {
    let mapping = make_input(Some(DataType::Text), None);

    assert_eq!(
        normalize_field_value(&mapping, "  hello  "),
        Ok(FieldValue::Text("hello".to_string()))
    );
    assert_eq!(
        normalize_field_value(&mapping, ""),
        Ok(FieldValue::Text(String::new()))
    );
}

#[test]
fn untyped_mappings_are_treated_as_text() {
    let mapping = make_input(None, None);

    assert_eq!(
        normalize_field_value(&mapping, " 42 "),
        Ok(FieldValue::Text("42".to_string()))
    );
}

#[test]
fn date_values_stay_textual_and_skip_range_checks() {
    let mapping = make_input(
        Some(DataType::Date),
        Some(Constraint::range(Some(0.0), Some(10.0))),
    );

    let value = normalize_field_value(&mapping, "2024-01-31").expect("dates normalize as text");
    assert_eq!(value, FieldValue::Text("2024-01-31".to_string()));
    assert_eq!(check_field_value(&mapping, &value), Ok(()));
}

#[test]
fn discrete_membership_is_case_insensitive() {
    let mapping = make_input(
        Some(DataType::Text),
        Some(Constraint::discrete(["North America", "Europe"])),
    );

    assert_eq!(
        check_field_value(&mapping, &FieldValue::Text("north america".to_string())),
        Ok(())
    );

    let error = check_field_value(&mapping, &FieldValue::Text("Asia".to_string()))
        .expect_err("Asia is not an allowed value");
    assert_eq!(
        error.to_string(),
        "Value must be one of: North America, Europe."
    );
}

#[test]
fn numeric_discrete_membership_uses_the_printed_form() {
    let mapping = make_input(
        Some(DataType::Number),
        Some(Constraint::discrete(["15", "20", "30"])),
    );

    let value = normalize_field_value(&mapping, "15").expect("15 parses");
    assert_eq!(value, FieldValue::Number(15.0));
    assert_eq!(check_field_value(&mapping, &value), Ok(()));

    assert_eq!(
        check_field_value(&mapping, &FieldValue::Number(25.0)),
        Err(FieldValueError::NotAllowed {
            allowed: "15, 20, 30".to_string()
        })
    );
}

#[test]
fn empty_discrete_lists_allow_anything() {
    let mapping = make_input(Some(DataType::Text), Some(Constraint::discrete::<_, String>([])));

    assert_eq!(
        check_field_value(&mapping, &FieldValue::Text("anything".to_string())),
        Ok(())
    );
}

#[test]
fn range_bounds_are_inclusive() {
    let mapping = make_input(
        Some(DataType::Currency),
        Some(Constraint::range(Some(1000.0), Some(1_000_000.0))),
    );

    assert_eq!(
        check_field_value(&mapping, &FieldValue::Number(1000.0)),
        Ok(())
    );
    assert_eq!(
        check_field_value(&mapping, &FieldValue::Number(1_000_000.0)),
        Ok(())
    );

    let below = check_field_value(&mapping, &FieldValue::Number(999.0))
        .expect_err("999 is under the minimum");
    assert_eq!(
        below.to_string(),
        "Value must be greater than or equal to 1000."
    );

    let above = check_field_value(&mapping, &FieldValue::Number(1_000_001.0))
        .expect_err("1000001 is over the maximum");
    assert_eq!(
        above.to_string(),
        "Value must be less than or equal to 1000000."
    );
}

#[test]
fn half_open_ranges_check_one_side_only() {
    let mapping = make_input(Some(DataType::Number), Some(Constraint::range(Some(0.0), None)));

    assert_eq!(
        check_field_value(&mapping, &FieldValue::Number(-1.0)),
        Err(FieldValueError::BelowMinimum { min: 0.0 })
    );
    assert_eq!(
        check_field_value(&mapping, &FieldValue::Number(1e12)),
        Ok(())
    );
}

#[test]
fn summaries_describe_the_constraint() {
    assert_eq!(constraint_summary(None), "No constraints configured");
    assert_eq!(
        constraint_summary(Some(&Constraint::discrete(["15", "20", "30"]))),
        "Allowed: 15, 20, 30"
    );
    assert_eq!(
        constraint_summary(Some(&Constraint::range(Some(0.0), Some(20.0)))),
        "Min 0 · Max 20"
    );
    assert_eq!(
        constraint_summary(Some(&Constraint::range(Some(0.0), None))),
        "Min 0"
    );
    assert_eq!(
        constraint_summary(Some(&Constraint::range(None, None))),
        "No constraints configured"
    );
    assert_eq!(
        constraint_summary(Some(&Constraint::discrete::<_, String>([]))),
        "No constraints configured"
    );
}
