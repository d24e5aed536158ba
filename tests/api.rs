use chrono::{Duration, Local, NaiveDate, TimeZone};
use mockito::{Matcher, Server};
use serde_json::json;

use tempo::api::TempoClient;
use tempo::cli_input::ReaderPrompt;
use tempo::commands::timer::log_session;
use tempo::config::Config;
use tempo::errors::TempoError;
use tempo::plans::PlanReport;
use tempo::timer::Session;

fn config(base_url: &str) -> Config {
    Config {
        token: "secret".into(),
        account_id: "557058:abc".into(),
        base_url: base_url.into(),
        timeout: 5,
    }
}

fn new_year() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

#[tokio::test]
async fn fetches_and_aggregates_plans() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/plans/user/557058:abc")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("from".into(), "2024-01-01".into()),
            Matcher::UrlEncoded("to".into(), "2024-01-01".into()),
        ]))
        .match_header("authorization", "Bearer secret")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "results": [
                    {"description": "A", "dates": {"values": [{"timePlannedSeconds": 3600}]}},
                    {"description": "B", "dates": {"values": [
                        {"timePlannedSeconds": 1800},
                        {"timePlannedSeconds": 1800}
                    ]}}
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let cfg = config(&server.url());
    let client = TempoClient::new(&cfg).expect("client");
    let plans = client
        .get_plans(&cfg.account_id, new_year())
        .await
        .expect("plans");
    mock.assert_async().await;

    let report = PlanReport::aggregate(&plans, new_year());
    let rows: Vec<(&str, f64)> = report
        .rows
        .iter()
        .map(|r| (r.description.as_str(), r.hours))
        .collect();
    assert_eq!(rows, vec![("A", 1.0), ("B", 1.0)]);
    assert_eq!(report.total, 2.0);
}

#[tokio::test]
async fn malformed_body_is_reported() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", Matcher::Regex("^/plans/user/".into()))
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"results": "nope"}"#)
        .create_async()
        .await;

    let cfg = config(&server.url());
    let client = TempoClient::new(&cfg).expect("client");
    let err = client
        .get_plans(&cfg.account_id, new_year())
        .await
        .unwrap_err();
    assert!(matches!(err, TempoError::Decode(_)), "{:?}", err);
}

#[tokio::test]
async fn plan_bodies_of_the_wrong_shape_are_reported() {
    for body in ["{}", r#"{"results":[{"description":"Review"}]}"#] {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", Matcher::Regex("^/plans/user/".into()))
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(body)
            .create_async()
            .await;

        let cfg = config(&server.url());
        let client = TempoClient::new(&cfg).expect("client");
        let err = client
            .get_plans(&cfg.account_id, new_year())
            .await
            .unwrap_err();
        assert!(matches!(err, TempoError::Decode(_)), "{}: {:?}", body, err);
    }
}

#[tokio::test]
async fn rejected_token_is_an_authentication_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", Matcher::Regex("^/plans/user/".into()))
        .match_query(Matcher::Any)
        .with_status(401)
        .with_body(r#"{"errors":[{"message":"Token is invalid"}]}"#)
        .create_async()
        .await;

    let cfg = config(&server.url());
    let client = TempoClient::new(&cfg).expect("client");
    let err = client
        .get_plans(&cfg.account_id, new_year())
        .await
        .unwrap_err();
    match err {
        TempoError::Authentication(msg) => assert!(msg.contains("Token is invalid"), "{}", msg),
        other => panic!("unexpected {:?}", other),
    }
}

#[tokio::test]
async fn unreachable_api_fails_without_retry() {
    let cfg = config("http://127.0.0.1:1");
    let client = TempoClient::new(&cfg).expect("client");
    let err = client
        .get_plans(&cfg.account_id, new_year())
        .await
        .unwrap_err();
    assert!(
        matches!(err, TempoError::Network(_) | TempoError::Other(_)),
        "{:?}",
        err
    );
}

#[tokio::test]
async fn logs_timer_session() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/worklogs")
        .match_header("authorization", "Bearer secret")
        .match_body(Matcher::Json(json!({
            "issueKey": "DUM-1",
            "timeSpentSeconds": 2700,
            "billableSeconds": 2700,
            "startDate": "2024-01-01",
            "startTime": "09:00:00",
            "description": "Pairing on the parser",
            "authorAccountId": "557058:abc"
        })))
        .with_status(200)
        .with_body(
            json!({
                "tempoWorklogId": 126,
                "issue": {"key": "DUM-1"},
                "timeSpentSeconds": 2700,
                "startDate": "2024-01-01"
            })
            .to_string(),
        )
        .create_async()
        .await;

    let cfg = config(&server.url());
    let client = TempoClient::new(&cfg).expect("client");
    let session = Session {
        started_at: Local
            .with_ymd_and_hms(2024, 1, 1, 9, 0, 0)
            .single()
            .expect("unambiguous local time"),
        elapsed: Duration::minutes(38),
    };
    let mut prompt = ReaderPrompt::new("\nDUM-1\nPairing on the parser\n".as_bytes(), Vec::new());
    let mut out = Vec::new();
    let worklog = log_session(&client, &cfg, session, &mut prompt, &mut out)
        .await
        .expect("submitted");
    mock.assert_async().await;

    assert_eq!(worklog.tempo_worklog_id, Some(126));
    let printed = String::from_utf8(out).expect("utf8");
    assert!(printed.contains("Logging 45m"), "{}", printed);
    assert!(printed.contains("Time log submitted! Worklog 126 on DUM-1"), "{}", printed);
}

#[tokio::test]
async fn rejected_worklog_surfaces_api_message() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/worklogs")
        .with_status(400)
        .with_body(r#"{"errors":[{"message":"Issue does not exist"}]}"#)
        .create_async()
        .await;

    let cfg = config(&server.url());
    let client = TempoClient::new(&cfg).expect("client");
    let session = Session {
        started_at: Local::now(),
        elapsed: Duration::minutes(5),
    };
    let mut prompt = ReaderPrompt::new("NOPE-1\n\n".as_bytes(), Vec::new());
    let err = log_session(&client, &cfg, session, &mut prompt, &mut Vec::new())
        .await
        .unwrap_err();
    match err.downcast_ref::<TempoError>() {
        Some(TempoError::Http { status, message }) => {
            assert_eq!(status.as_u16(), 400);
            assert_eq!(message, "Issue does not exist");
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[tokio::test]
async fn plans_command_prints_table_for_tomorrow() {
    let tomorrow = Local::now().date_naive().succ_opt().unwrap();
    let day = tomorrow.format("%Y-%m-%d").to_string();
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/plans/user/557058:abc")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("from".into(), day.clone()),
            Matcher::UrlEncoded("to".into(), day),
        ]))
        .with_status(200)
        .with_body(
            json!({"results": [
                {"description": "Sprint planning", "dates": {"values": [{"timePlannedSeconds": 9000}]}}
            ]})
            .to_string(),
        )
        .create_async()
        .await;

    let cfg = config(&server.url());
    let mut out = Vec::new();
    let report = tempo::commands::plans::plans(&cfg, tempo::day::PlanDay::Tomorrow, &mut out)
        .await
        .expect("plans");
    mock.assert_async().await;

    assert_eq!(report.date, tomorrow);
    assert_eq!(report.total, 2.5);
    let table = String::from_utf8(out).expect("utf8");
    assert!(table.contains("Sprint planning"), "{}", table);
    assert!(table.contains("2.5"), "{}", table);
}
