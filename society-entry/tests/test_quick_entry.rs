use chrono::NaiveDate;
use society_core::{
    Apartment, Category, FixedClock, Flat, FlatDirectory, InMemoryLedger, LedgerStore, Lookup,
    Resident, ResidentRole, SequentialIds, Transaction, TransactionType,
};
use society_entry::{ParseWarning, ParserOptions, TransactionTextParser};

const NO_FLAT: &str = "No flat number specified for maintenance receipt";
const NO_AMOUNT: &str = "Amount not detected or is zero";

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
}

fn parser<'d>() -> TransactionTextParser<'d> {
    TransactionTextParser::new()
        .with_clock(FixedClock(today()))
        .with_ids(SequentialIds::new())
}

fn directory() -> FlatDirectory {
    FlatDirectory::new(
        vec![Apartment {
            id: "apt-7".into(),
            name: "Green Valley Heights".into(),
        }],
        vec![
            Flat {
                flat_id: "flat-a101".into(),
                apartment_id: "apt-7".into(),
                number: "A-101".into(),
                residents: vec![Resident {
                    party_id: "party-rajesh".into(),
                    name: "Rajesh Kumar".into(),
                    role: ResidentRole::Owner,
                }],
            },
            Flat {
                flat_id: "flat-b202".into(),
                apartment_id: "apt-7".into(),
                number: "B-202".into(),
                residents: vec![
                    Resident {
                        party_id: "party-priya".into(),
                        name: "Priya Sharma".into(),
                        role: ResidentRole::Owner,
                    },
                    Resident {
                        party_id: "party-rajesh-i".into(),
                        name: "Rajesh Iyer".into(),
                        role: ResidentRole::Tenant,
                    },
                ],
            },
        ],
    )
}

#[test]
fn test_maintenance_sentence_with_flat_and_date() {
    let r = parser().parse("maintenance 5000 Rajesh A-101 15/01/2025");
    assert_eq!(r.parsed.transaction_type, TransactionType::MaintenanceReceipt);
    assert_eq!(r.parsed.category, Category::Maintenance);
    assert_eq!(r.parsed.amount, 5000);
    assert_eq!(r.parsed.flat_reference.as_deref(), Some("A-101"));
    assert_eq!(r.parsed.occurred_on.to_string(), "2025-01-15");
    assert!(r.warnings.is_empty());
}

#[test]
fn test_electricity_expense() {
    let r = parser().parse("expense 3500 electricity");
    assert_eq!(r.parsed.transaction_type, TransactionType::Expense);
    assert_eq!(r.parsed.category, Category::Electricity);
    assert_eq!(r.parsed.amount, 3500);
    assert_eq!(r.parsed.flat_reference, None);
    assert!(r.warnings.is_empty());
}

#[test]
fn test_maintenance_received_has_both_warnings() {
    let r = parser().parse("maintenance received");
    assert_eq!(r.parsed.amount, 0);
    assert_eq!(r.parsed.transaction_type, TransactionType::MaintenanceReceipt);
    assert_eq!(r.parsed.flat_reference, None);
    assert_eq!(r.warning_messages(), vec![NO_FLAT, NO_AMOUNT]);
}

#[test]
fn test_empty_input_defaults() {
    let r = parser().parse("");
    assert_eq!(r.parsed.amount, 0);
    assert_eq!(r.parsed.transaction_type, TransactionType::OtherReceipt);
    assert_eq!(r.parsed.category, Category::Maintenance);
    assert_eq!(r.parsed.flat_reference, None);
    assert_eq!(r.parsed.party_name, None);
    assert_eq!(r.parsed.occurred_on.to_string(), "2026-10-18");
    assert_eq!(r.warnings, vec![ParseWarning::AmountNotDetected]);
    assert_eq!(r.proposed_transaction.narration, "NLP Entry: ");
}

#[test]
fn test_expense_keyword_takes_precedence() {
    let r = parser().parse("maintenance expense 200");
    assert_eq!(r.parsed.transaction_type, TransactionType::Expense);
    assert_eq!(r.parsed.category, Category::Other);
}

#[test]
fn test_two_digit_year() {
    let r = parser().parse("paid 900 water 10/01/25");
    assert_eq!(r.parsed.occurred_on.to_string(), "2025-01-10");
}

#[test]
fn test_flat_number_can_shadow_amount() {
    let r = parser().parse("A-101 maintenance 5000");
    assert_eq!(r.parsed.amount, 101);
    assert_eq!(r.parsed.flat_reference.as_deref(), Some("A-101"));
}

#[test]
fn test_deterministic_with_fixed_seams() {
    let inputs = [
        "maintenance 5000 Rajesh A-101 15/01/2025",
        "",
        "paid 1200 housekeeping staff",
        "received 300 hall booking from Meena",
    ];
    for input in inputs {
        let a = parser().parse(input);
        let b = parser().parse(input);
        assert_eq!(a, b, "{input}");
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }
}

#[test]
fn test_ids_are_fresh_per_call() {
    let p = parser();
    let a = p.parse("maintenance 100 A-1");
    let b = p.parse("maintenance 100 A-1");
    assert_ne!(a.proposed_transaction.id, b.proposed_transaction.id);
    assert_eq!(a.parsed, b.parsed);
}

#[test]
fn test_default_parse_never_panics_on_odd_input() {
    let odd = [
        "   ",
        "₹₹₹ ५०० नमस्ते",
        "99999999999999999999999999999999",
        "--//--",
        "a-",
        "0/0/00",
        "\u{0}\u{7f}",
    ];
    for input in odd {
        let r = society_entry::parse(input);
        assert!(!r.proposed_transaction.id.is_empty());
        assert!(!r.parsed.occurred_on.year.is_empty());
    }
}

#[test]
fn test_json_shape() {
    let r = parser().parse("maintenance 5000 Rajesh A-101 15/01/2025");
    let v = serde_json::to_value(&r).unwrap();
    assert_eq!(v["parsed"]["transaction_type"], "maintenance_receipt");
    assert_eq!(v["parsed"]["occurred_on"], "2025-01-15");
    assert_eq!(v["parsed"]["payment_mode"], "upi");
    assert_eq!(v["proposed_transaction"]["provenance"], "nlp");
    assert_eq!(v["warnings"], serde_json::json!([]));
    assert_eq!(v["resolution"]["flat"]["outcome"], "not_attempted");
}

#[test]
fn test_directory_resolves_flat_and_party() {
    let dir = directory();
    let r = parser()
        .with_directory(&dir)
        .parse("maintenance 5000 Rajesh A-101 15/01/2025");
    assert_eq!(r.resolution.flat, Lookup::Resolved { id: "flat-a101".into() });
    assert_eq!(r.resolution.party, Lookup::Resolved { id: "party-rajesh".into() });
    assert_eq!(r.proposed_transaction.apartment_id, "apt-7");
    assert_eq!(r.proposed_transaction.flat_id.as_deref(), Some("flat-a101"));
    assert_eq!(r.proposed_transaction.party_id.as_deref(), Some("party-rajesh"));
    assert!(r.warnings.is_empty());
    assert_eq!(
        r.explanation,
        "Parsed as maintenance receipt of ₹5000 for maintenance (Flat: A-101) at Green Valley Heights from Rajesh"
    );
}

#[test]
fn test_directory_matches_unhyphenated_flat() {
    let dir = directory();
    let r = parser().with_directory(&dir).parse("received 2500 Priya b202");
    assert_eq!(r.proposed_transaction.flat_id.as_deref(), Some("flat-b202"));
    assert_eq!(r.proposed_transaction.party_id.as_deref(), Some("party-priya"));
}

#[test]
fn test_unknown_flat_is_a_warning_not_a_placeholder() {
    let dir = directory();
    let p = parser().with_options(ParserOptions {
        legacy_placeholders: true,
        ..ParserOptions::default()
    });
    let p = p.with_directory(&dir);
    let r = p.parse("maintenance 4000 C-9");
    assert_eq!(r.resolution.flat, Lookup::Unmatched { token: "C-9".into() });
    assert_eq!(r.proposed_transaction.flat_id, None);
    assert_eq!(r.proposed_transaction.apartment_id, "apt-1");
    assert_eq!(r.warning_messages(), vec!["Flat C-9 not found in directory"]);
}

#[test]
fn test_party_lookup_warnings() {
    let dir = directory();
    let p = parser().with_directory(&dir);

    let r = p.parse("received 700 from Rajesh");
    assert_eq!(
        r.warning_messages(),
        vec![NO_FLAT, "Party Rajesh matches multiple residents"]
    );

    // On B-202 only the tenant Rajesh Iyer fits.
    let r = p.parse("received 700 from Rajesh B-202");
    assert_eq!(r.proposed_transaction.party_id.as_deref(), Some("party-rajesh-i"));
    assert!(r.warnings.is_empty());

    let r = p.parse("paid 900 plumber Ganesh");
    assert_eq!(r.warning_messages(), vec!["Party plumber Ganesh not found in directory"]);
}

#[test]
fn test_flat_number_shared_by_two_apartments_is_not_guessed() {
    let dir = FlatDirectory::new(
        vec![
            Apartment {
                id: "apt-gv".into(),
                name: "Green Valley Heights".into(),
            },
            Apartment {
                id: "apt-rg".into(),
                name: "Royal Gardens".into(),
            },
        ],
        vec![
            Flat {
                flat_id: "flat-gv-a101".into(),
                apartment_id: "apt-gv".into(),
                number: "A-101".into(),
                residents: vec![],
            },
            Flat {
                flat_id: "flat-rg-a101".into(),
                apartment_id: "apt-rg".into(),
                number: "A-101".into(),
                residents: vec![],
            },
        ],
    );
    let r = parser().with_directory(&dir).parse("maintenance 5000 A-101");
    assert_eq!(
        r.resolution.flat,
        Lookup::Ambiguous {
            token: "A-101".into(),
            candidates: vec!["flat-gv-a101".into(), "flat-rg-a101".into()],
        }
    );
    assert_eq!(r.proposed_transaction.flat_id, None);
    assert_eq!(r.proposed_transaction.apartment_id, "apt-1");
    assert_eq!(
        r.explanation,
        "Parsed as maintenance receipt of ₹5000 for maintenance (Flat: A-101)"
    );
    assert_eq!(r.warning_messages(), vec!["Flat A-101 matches multiple apartments"]);
}

#[test]
fn test_category_word_is_looked_up_as_party() {
    // The party heuristic keeps "electricity", so a directory lookup misses.
    let dir = directory();
    let r = parser().with_directory(&dir).parse("expense 3500 electricity");
    assert_eq!(r.parsed.party_name.as_deref(), Some("electricity"));
    assert_eq!(r.resolution.flat, Lookup::NoToken);
    assert_eq!(
        r.resolution.party,
        Lookup::Unmatched { token: "electricity".into() }
    );
    assert_eq!(r.proposed_transaction.party_id, None);
    assert_eq!(
        r.warning_messages(),
        vec!["Party electricity not found in directory"]
    );
}

#[test]
fn test_party_with_trailing_comma_resolves() {
    let dir = directory();
    let r = parser()
        .with_directory(&dir)
        .parse("received 5000 from Rajesh, A-101");
    assert_eq!(r.parsed.party_name.as_deref(), Some("Rajesh,"));
    assert_eq!(r.proposed_transaction.flat_id.as_deref(), Some("flat-a101"));
    assert_eq!(r.proposed_transaction.party_id.as_deref(), Some("party-rajesh"));
    assert!(r.warnings.is_empty());
}

#[test]
fn test_confirmed_proposal_lands_in_store() {
    let dir = directory();
    let mut store = InMemoryLedger::new(dir.apartments.clone(), dir.flats.clone());
    let directory = store.directory();
    let r = parser()
        .with_directory(&directory)
        .parse("maintenance 5000 Rajesh A-101 15/01/2025");

    let txn = Transaction::try_from(r.proposed_transaction).unwrap();
    store.record(txn).unwrap();
    assert_eq!(store.transactions().len(), 1);
    assert_eq!(store.transactions()[0].flat_id.as_deref(), Some("flat-a101"));
}

#[test]
fn test_placeholder_apartment_is_rejected_by_store() {
    let dir = directory();
    let mut store = InMemoryLedger::new(dir.apartments.clone(), dir.flats.clone());
    let r = parser().parse("maintenance 5000 A-101 15/01/2025");
    let txn = Transaction::try_from(r.proposed_transaction).unwrap();
    assert!(store.record(txn).is_err());
}
