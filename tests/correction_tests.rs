mod common;
use common::{ABSENCE, FakeApi, day, ymd};
use reqwest::StatusCode;
use rpontomais::api::client::check_submission;
use rpontomais::config::Config;
use rpontomais::core::adjust::AdjustLogic;
use rpontomais::core::correction::{CorrectionTemplate, adjustment_path, submit_all};
use rpontomais::core::month::MonthCursor;
use rpontomais::core::scan::ScanPolicy;
use rpontomais::errors::AppError;

fn april_29() -> rpontomais::models::WorkDay {
    day(1991631201, ymd(2025, 4, 29), ABSENCE, false)
}

#[test]
fn test_adjustment_path() {
    assert_eq!(
        adjustment_path(&april_29()),
        "/meu-ponto/ajuste/2025-04-29;id=1991631201"
    );
}

#[test]
fn test_default_template_four_punches() {
    let template = CorrectionTemplate::default();
    let proposal = template.proposal_for(&april_29());

    assert_eq!(proposal.date, ymd(2025, 4, 29));
    assert_eq!(proposal.proposal_type, 1);

    let times: Vec<&str> = proposal
        .times_attributes
        .iter()
        .map(|t| t.time.as_str())
        .collect();
    assert_eq!(times, vec!["08:00", "12:00", "13:00", "17:00"]);
    assert!(proposal.times_attributes.iter().all(|t| t.edited));
    assert!(
        proposal
            .times_attributes
            .iter()
            .all(|t| t.date == ymd(2025, 4, 29))
    );
}

#[test]
fn test_request_json_layout() {
    let request = CorrectionTemplate::default().request_for(&april_29());
    let json = serde_json::to_value(&request).expect("serialize");

    assert_eq!(json["_path"], "/meu-ponto/ajuste/2025-04-29;id=1991631201");
    assert_eq!(json["_appVersion"], "0.10.32");
    assert_eq!(json["_device"]["browser"]["name"], "chrome");
    assert_eq!(json["_device"]["browser"]["version"], "135.0.0.0");
    assert_eq!(json["_device"]["browser"]["versionSearchString"], "chrome");

    let proposal = &json["proposal"];
    assert_eq!(proposal["date"], "2025-04-29");
    assert_eq!(proposal["proposal_type"], 1);
    assert_eq!(proposal["motive"], "Esqueci de apontar os horarios GoAjuste");
    assert_eq!(proposal["times_attributes"][0]["date"], "2025-04-29");
    assert_eq!(proposal["times_attributes"][0]["time"], "08:00");
    assert_eq!(proposal["times_attributes"][3]["time"], "17:00");
    assert_eq!(proposal["times_attributes"][3]["edited"], true);
}

#[test]
fn test_template_from_config() {
    let cfg = Config {
        motive: "Forgot to punch".to_string(),
        schedule: vec!["09:00".into(), "18:00".into()],
        ..Config::default()
    };
    let template = CorrectionTemplate::from_config(&cfg).expect("template");
    let proposal = template.proposal_for(&april_29());

    assert_eq!(proposal.motive, "Forgot to punch");
    assert_eq!(proposal.times_attributes.len(), 2);
    assert_eq!(proposal.times_attributes[1].time, "18:00");

    let bad = Config {
        schedule: vec!["25:00".into()],
        ..Config::default()
    };
    assert!(matches!(
        CorrectionTemplate::from_config(&bad),
        Err(AppError::InvalidTime(t)) if t == "25:00"
    ));
}

#[test]
fn test_only_created_counts_as_success() {
    assert!(check_submission(StatusCode::CREATED, String::new()).is_ok());

    for status in [
        StatusCode::OK,
        StatusCode::UNPROCESSABLE_ENTITY,
        StatusCode::UNAUTHORIZED,
        StatusCode::INTERNAL_SERVER_ERROR,
    ] {
        let err = check_submission(status, "{\"error\":\"nope\"}".to_string())
            .expect_err("non-201 must fail");
        match err {
            AppError::Submission { status: s, body } => {
                assert_eq!(s, status.as_u16());
                assert_eq!(body, "{\"error\":\"nope\"}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}

#[test]
fn test_submit_all_continues_after_failure() {
    let mut api = FakeApi::default();
    api.rejected_days.insert(ymd(2025, 4, 28));

    let days = vec![
        day(1, ymd(2025, 4, 29), ABSENCE, false),
        day(2, ymd(2025, 4, 28), ABSENCE, false),
        day(3, ymd(2025, 4, 25), ABSENCE, false),
    ];

    let mut before = Vec::new();
    let mut after = Vec::new();
    let report = submit_all(
        &api,
        &CorrectionTemplate::default(),
        &days,
        |d| before.push(d.id),
        |d, r| after.push((d.id, r.is_ok())),
    );

    assert_eq!(report.attempted(), 3);
    assert_eq!(report.submitted, vec![ymd(2025, 4, 29), ymd(2025, 4, 25)]);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].0, ymd(2025, 4, 28));
    assert!(report.failed[0].1.contains("proposal already exists"));

    assert_eq!(before, vec![1, 2, 3]);
    assert_eq!(after, vec![(1, true), (2, false), (3, true)]);

    let paths: Vec<String> = api.submitted.borrow().iter().map(|r| r.path.clone()).collect();
    assert_eq!(
        paths,
        vec![
            "/meu-ponto/ajuste/2025-04-29;id=1",
            "/meu-ponto/ajuste/2025-04-28;id=2",
            "/meu-ponto/ajuste/2025-04-25;id=3",
        ]
    );
}

#[test]
fn test_full_run_submits_each_flagged_day_once() {
    let api = FakeApi::default()
        .with_month(
            2025,
            4,
            vec![
                day(1, ymd(2025, 4, 29), ABSENCE, false),
                day(2, ymd(2025, 4, 28), ABSENCE, true),
                day(3, ymd(2025, 4, 25), "Normal", false),
            ],
        )
        .with_month(2025, 3, vec![day(4, ymd(2025, 3, 31), ABSENCE, false)]);

    let policy = ScanPolicy {
        absence_status: ABSENCE.to_string(),
        max_months: 120,
    };
    let start = MonthCursor::new(2025, 4).expect("month");
    let report = AdjustLogic::apply(&api, start, &policy, &CorrectionTemplate::default(), false);

    assert_eq!(report.scan.totals.for_adjustment, 2);
    let submissions = report.submissions.expect("submissions");
    assert_eq!(submissions.submitted, vec![ymd(2025, 4, 29), ymd(2025, 3, 31)]);
    assert!(submissions.failed.is_empty());
    assert_eq!(api.submitted.borrow().len(), 2);
}

#[test]
fn test_dry_run_submits_nothing() {
    let api = FakeApi::default().with_month(
        2025,
        4,
        vec![day(1, ymd(2025, 4, 29), ABSENCE, false)],
    );
    let policy = ScanPolicy {
        absence_status: ABSENCE.to_string(),
        max_months: 120,
    };
    let start = MonthCursor::new(2025, 4).expect("month");
    let report = AdjustLogic::apply(&api, start, &policy, &CorrectionTemplate::default(), true);

    assert_eq!(report.scan.flagged.len(), 1);
    assert!(report.submissions.is_none());
    assert!(api.submitted.borrow().is_empty());
}
