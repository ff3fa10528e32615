use chrono::{DateTime, SecondsFormat, Utc};
use proptest::prelude::*;
use rstest::rstest;

use crate::tests::common::{build_contractor, build_employee};
use crate::types::worker::{ValidationError, Worker};

#[rstest]
#[case::employee(build_employee("empl@mail.com"))]
#[case::contractor(build_contractor("contractor@mail.com"))]
#[case::contractor_with_offset(Worker {
    contract_end: Some("2022-01-30T10:00:00+02:00".to_string()),
    ..build_contractor("offset@mail.com")
})]
#[case::contractor_with_empty_job_title(Worker {
    job_title: Some(String::new()),
    ..build_contractor("blank-title@mail.com")
})]
#[case::employee_with_empty_contract_end(Worker {
    contract_end: Some(String::new()),
    ..build_employee("blank-end@mail.com")
})]
fn valid_workers_pass(#[case] worker: Worker) {
    assert_eq!(worker.validate(), Ok(()));
}

#[rstest]
#[case::missing_email(Worker { email: String::new(), ..build_employee("") }, ValidationError::MissingEmail)]
#[case::contractor_missing_contract_end(
    Worker { contract_end: None, ..build_contractor("c@mail.com") },
    ValidationError::InvalidContractEnd
)]
#[case::contractor_unparseable_contract_end(
    Worker { contract_end: Some("Jan 31st, 2022".to_string()), ..build_contractor("c@mail.com") },
    ValidationError::InvalidContractEnd
)]
#[case::contractor_date_only(
    Worker { contract_end: Some("2022-01-30".to_string()), ..build_contractor("c@mail.com") },
    ValidationError::InvalidContractEnd
)]
#[case::contractor_space_separator(
    Worker { contract_end: Some("2025-01-01 00:00:00Z".to_string()), ..build_contractor("c@mail.com") },
    ValidationError::InvalidContractEnd
)]
#[case::contractor_lowercase_separator(
    Worker { contract_end: Some("2025-01-01t00:00:00Z".to_string()), ..build_contractor("c@mail.com") },
    ValidationError::InvalidContractEnd
)]
#[case::contractor_lowercase_utc(
    Worker { contract_end: Some("2025-01-01T00:00:00z".to_string()), ..build_contractor("c@mail.com") },
    ValidationError::InvalidContractEnd
)]
#[case::contractor_all_lowercase(
    Worker { contract_end: Some("2025-01-01t00:00:00z".to_string()), ..build_contractor("c@mail.com") },
    ValidationError::InvalidContractEnd
)]
#[case::contractor_with_job_title(
    Worker { job_title: Some("seo admin".to_string()), ..build_contractor("c@mail.com") },
    ValidationError::JobTitleForContractor
)]
#[case::employee_missing_job_title(
    Worker { job_title: None, ..build_employee("e@mail.com") },
    ValidationError::MissingJobTitle
)]
#[case::employee_with_contract_end(
    Worker { contract_end: Some("2022-01-30T00:00:00Z".to_string()), ..build_employee("e@mail.com") },
    ValidationError::ContractEndForEmployee
)]
fn invalid_workers_fail(#[case] worker: Worker, #[case] expected: ValidationError) {
    assert_eq!(worker.validate(), Err(expected));
}

/// The first broken rule wins when several are broken at once.
#[rstest]
#[case::email_before_everything(
    Worker { email: String::new(), is_contractor: true, contract_end: None, job_title: Some("x".into()), ..Worker::default() },
    ValidationError::MissingEmail
)]
#[case::contract_end_before_job_title(
    Worker { email: "c@mail.com".into(), is_contractor: true, contract_end: Some("bad".into()), job_title: Some("x".into()), ..Worker::default() },
    ValidationError::InvalidContractEnd
)]
#[case::job_title_before_contract_end(
    Worker { email: "e@mail.com".into(), is_contractor: false, contract_end: Some("2022-01-30T00:00:00Z".into()), job_title: None, ..Worker::default() },
    ValidationError::MissingJobTitle
)]
fn validation_reports_first_violation(#[case] worker: Worker, #[case] expected: ValidationError) {
    assert_eq!(worker.validate(), Err(expected));
}

#[test]
fn validation_messages_are_stable() {
    assert_eq!(ValidationError::MissingEmail.to_string(), "an email is required");
    assert_eq!(
        ValidationError::InvalidContractEnd.to_string(),
        "invalid contract end date for a contractor, must be in RFC3339"
    );
    assert_eq!(ValidationError::MissingJobTitle.to_string(), "a job title is required for employees");
    assert_eq!(ValidationError::ContractEndForEmployee.to_string(), "no contract end date for employees");
    assert_eq!(ValidationError::JobTitleForContractor.to_string(), "no job titles for contractors");
}

#[test]
fn missing_json_fields_decode_to_empty_values() {
    let worker: Worker = serde_json::from_str(r#"{"isContractor":true}"#).unwrap();

    assert_eq!(worker, Worker { is_contractor: true, ..Worker::default() });
    assert_eq!(worker.validate(), Err(ValidationError::MissingEmail));
}

#[test]
fn null_fields_decode_like_missing_ones() {
    let worker: Worker = serde_json::from_str(
        r#"{"email":"a@x.com","name":null,"isContractor":null,"jobTitle":"E","contractEnd":null,"tags":null}"#,
    )
    .unwrap();

    assert_eq!(
        worker,
        Worker { email: "a@x.com".to_string(), job_title: Some("E".to_string()), ..Worker::default() }
    );
    assert_eq!(worker.validate(), Ok(()));
}

#[test]
fn absent_optional_fields_are_not_serialized() {
    let value = serde_json::to_value(build_employee("empl@mail.com")).unwrap();

    assert_eq!(
        value,
        serde_json::json!({
            "email": "empl@mail.com",
            "name": "john employee smith",
            "isContractor": false,
            "jobTitle": "seo admin",
            "tags": ["copywriting", "seo"],
        })
    );
}

fn rfc3339_timestamp() -> impl Strategy<Value = DateTime<Utc>> {
    (0i64..4_102_444_800).prop_map(|secs| DateTime::<Utc>::from_timestamp(secs, 0).unwrap())
}

/// A contract end date paired with whether it is acceptable for a contractor.
fn any_contract_end() -> impl Strategy<Value = (Option<String>, bool)> {
    prop_oneof![
        Just((None::<String>, false)),
        Just((Some(String::new()), false)),
        rfc3339_timestamp().prop_map(|ts| (Some(ts.to_rfc3339_opts(SecondsFormat::Secs, true)), true)),
        rfc3339_timestamp().prop_map(|ts| (Some(ts.to_rfc3339()), true)),
        rfc3339_timestamp().prop_map(|ts| (Some(ts.format("%Y-%m-%d %H:%M:%SZ").to_string()), false)),
        rfc3339_timestamp().prop_map(|ts| (Some(ts.format("%Y-%m-%dt%H:%M:%SZ").to_string()), false)),
        rfc3339_timestamp().prop_map(|ts| (Some(ts.format("%Y-%m-%dT%H:%M:%Sz").to_string()), false)),
        rfc3339_timestamp().prop_map(|ts| (Some(ts.format("%Y-%m-%d").to_string()), false)),
        "[a-zA-Z :-]{1,24}".prop_map(|junk| (Some(junk), false)),
    ]
}

fn any_job_title() -> impl Strategy<Value = Option<String>> {
    prop_oneof![Just(None), Just(Some(String::new())), "[a-z ]{1,16}".prop_map(Some),]
}

/// A worker paired with whether its contract end date is acceptable for a contractor.
fn any_worker(is_contractor: bool) -> impl Strategy<Value = (Worker, bool)> {
    ("[a-z]{1,8}@[a-z]{1,8}\\.com", "[A-Za-z ]{0,16}", any_contract_end(), any_job_title()).prop_map(
        move |(email, name, (contract_end, valid_contract_end), job_title)| {
            let worker = Worker { email, name, is_contractor, contract_end, job_title, tags: vec![] };
            (worker, valid_contract_end)
        },
    )
}

proptest! {
    #[test]
    fn contractor_valid_iff_rfc3339_end_and_no_title((worker, valid_contract_end) in any_worker(true)) {
        let expected = valid_contract_end && worker.job_title().is_empty();
        prop_assert_eq!(worker.validate().is_ok(), expected);
    }

    #[test]
    fn employee_valid_iff_title_and_no_end((worker, _) in any_worker(false)) {
        let expected = !worker.job_title().is_empty() && worker.contract_end().is_empty();
        prop_assert_eq!(worker.validate().is_ok(), expected);
    }

    #[test]
    fn empty_email_always_fails((worker, _) in any::<bool>().prop_flat_map(any_worker)) {
        let worker = Worker { email: String::new(), ..worker };
        prop_assert_eq!(worker.validate(), Err(ValidationError::MissingEmail));
    }
}
