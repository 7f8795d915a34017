use proposal_sdk::{ProposalField, ProposalForm, ProposalRecord};

const SAMPLE_VALUES: [&str; 5] = [
    "",
    "Acme Corp",
    "€750,000 total across 3 years",
    "- line one\n- line two\n- line three",
    "   padded   ",
];

fn key_set(record: &ProposalRecord) -> Vec<String> {
    let value = serde_json::to_value(record).unwrap();
    let mut keys: Vec<String> = value.as_object().unwrap().keys().cloned().collect();
    keys.sort();
    keys
}

#[test]
fn test_update_changes_only_target_field() {
    for field in ProposalField::ALL {
        for value in SAMPLE_VALUES {
            let mut form = ProposalForm::new();
            let before = form.current_record();

            form.update(field, value);
            let after = form.current_record();

            assert_eq!(after.get(field), value, "field {}", field);
            for other in ProposalField::ALL.into_iter().filter(|f| *f != field) {
                assert_eq!(after.get(other), before.get(other), "field {} changed", other);
            }
        }
    }
}

#[test]
fn test_key_set_is_invariant_under_updates() {
    let mut form = ProposalForm::new();
    let expected = key_set(&form.current_record());
    assert_eq!(expected.len(), 14);

    for (i, field) in ProposalField::ALL.into_iter().cycle().take(50).enumerate() {
        form.update(field, SAMPLE_VALUES[i % SAMPLE_VALUES.len()]);
        assert_eq!(key_set(&form.current_record()), expected);
    }
}

#[test]
fn test_repeated_snapshots_are_equal() {
    let mut form = ProposalForm::new();
    form.update(ProposalField::Kpis, "- % renewable electricity");
    assert_eq!(form.current_record(), form.current_record());
}

#[test]
fn test_budget_update_keeps_title() {
    let mut form = ProposalForm::new();
    let title = form.current_record().title;

    form.update(ProposalField::Budget, "€750,000 total across 3 years");

    let record = form.current_record();
    assert_eq!(record.budget, "€750,000 total across 3 years");
    assert_eq!(record.title, title);
}
