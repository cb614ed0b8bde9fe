use anyhow::Result;
use secret_santa::adapters::csv_codec;
use secret_santa::core::Pipeline;
use secret_santa::{
    AssignmentPipeline, AssignmentService, CliConfig, LocalStorage, Participant, SantaEngine,
    SantaError,
};
use std::collections::HashMap;
use tempfile::TempDir;

const TEAM_CSV: &str = "Employee_Name,Employee_EmailID\n\
                        Hamish Murray,hamish.murray@acme.com\n\
                        Layla Graham,layla.graham@acme.com\n\
                        Matthew King,matthew.king@acme.com\n\
                        Benjamin Collins,benjamin.collins@acme.com\n\
                        Isabella Scott,isabella.scott@acme.com\n";

fn cli_config(dir: &TempDir, participants: &str, history: Option<&str>) -> CliConfig {
    CliConfig {
        participants: dir.path().join(participants).to_string_lossy().into_owned(),
        history: history.map(|h| dir.path().join(h).to_string_lossy().into_owned()),
        output_path: dir.path().join("out").to_string_lossy().into_owned(),
        output_formats: vec!["csv".to_string(), "json".to_string()],
        max_attempts: 1000,
        seed: None,
        dry_run: false,
        verbose: false,
    }
}

#[tokio::test]
async fn test_end_to_end_csv_draw() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("team.csv"), TEAM_CSV)?;

    let config = cli_config(&temp_dir, "team.csv", None);
    let engine = SantaEngine::new(AssignmentPipeline::new(
        LocalStorage::new(".".to_string()),
        config,
    ));

    let output_path = engine.run().await?;
    assert!(output_path.ends_with("secret_santa_assignments.csv"));

    let csv_output = std::fs::read(&output_path)?;
    let drawn = csv_codec::parse_history(&csv_output)?;
    assert_eq!(drawn.len(), 5);
    for pair in &drawn {
        assert_ne!(pair.giver_identity, pair.receiver_identity);
    }

    let json_output =
        std::fs::read_to_string(temp_dir.path().join("out/secret_santa_assignments.json"))?;
    let report: serde_json::Value = serde_json::from_str(&json_output)?;
    assert_eq!(report["success"], true);
    assert_eq!(report["total_assignments"], 5);
    Ok(())
}

#[tokio::test]
async fn test_last_years_output_feeds_this_years_draw() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("team.csv"), TEAM_CSV)?;

    let participants = csv_codec::parse_participants(TEAM_CSV.as_bytes())?;
    let last_year = AssignmentService::new().generate(participants, None)?;
    std::fs::write(
        temp_dir.path().join("2025.csv"),
        csv_codec::write_assignments(&last_year)?,
    )?;

    let config = cli_config(&temp_dir, "team.csv", Some("2025.csv"));
    let pipeline = AssignmentPipeline::new(LocalStorage::new(".".to_string()), config);

    let request = pipeline.extract().await?;
    assert_eq!(request.previous_assignments.as_ref().map(Vec::len), Some(5));

    let result = pipeline.transform(request).await?;
    let previous: HashMap<&str, &str> = last_year
        .iter()
        .map(|p| (p.giver_identity.as_str(), p.receiver_identity.as_str()))
        .collect();
    for pair in &result.assignments {
        assert_ne!(previous[pair.giver_identity.as_str()], pair.receiver_identity);
    }
    Ok(())
}

#[tokio::test]
async fn test_json_request_draw() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let body = serde_json::json!({
        "current_employees": [
            {"name": "Alice", "email": "alice@x.com"},
            {"name": "Bob", "email": "bob@x.com"},
            {"name": "Charlie", "email": "charlie@x.com"}
        ],
        "previous_assignments": [{
            "employee_name": "Alice",
            "employee_email": "alice@x.com",
            "secret_child_name": "Bob",
            "secret_child_email": "bob@x.com"
        }]
    });
    std::fs::write(temp_dir.path().join("request.json"), body.to_string())?;

    let mut config = cli_config(&temp_dir, "request.json", None);
    config.output_formats = vec!["json".to_string()];
    let engine = SantaEngine::new(AssignmentPipeline::new(
        LocalStorage::new(".".to_string()),
        config,
    ));

    let output_path = engine.run().await?;
    let report: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(output_path)?)?;
    let assignments = report["assignments"].as_array().unwrap();
    let alice = assignments
        .iter()
        .find(|a| a["employee_email"] == "alice@x.com")
        .unwrap();
    assert_eq!(alice["secret_child_email"], "charlie@x.com");
    Ok(())
}

#[tokio::test]
async fn test_duplicate_emails_abort_without_output() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(
        temp_dir.path().join("team.csv"),
        "Employee_Name,Employee_EmailID\nAlice,alice@x.com\nAlicia,alice@x.com\nBob,bob@x.com\n",
    )?;

    let config = cli_config(&temp_dir, "team.csv", None);
    let engine = SantaEngine::new(AssignmentPipeline::new(
        LocalStorage::new(".".to_string()),
        config,
    ));

    let err = engine.run().await.unwrap_err();
    assert!(matches!(err, SantaError::DuplicateIdentity { .. }));
    assert_eq!(err.exit_code(), 1);
    assert!(!temp_dir.path().join("out").exists());
    Ok(())
}

#[tokio::test]
async fn test_dry_run_validates_without_writing() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("team.csv"), TEAM_CSV)?;

    let engine = SantaEngine::new(AssignmentPipeline::new(
        LocalStorage::new(".".to_string()),
        cli_config(&temp_dir, "team.csv", None),
    ));

    let summary = engine.dry_run().await?;
    assert_eq!(summary.participants, 5);
    assert_eq!(summary.previous_assignments, 0);
    assert!(!temp_dir.path().join("out").exists());
    Ok(())
}

#[tokio::test]
async fn test_dry_run_reports_single_participant() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(
        temp_dir.path().join("team.csv"),
        "Employee_Name,Employee_EmailID\nAlice,alice@x.com\n",
    )?;

    let engine = SantaEngine::new(AssignmentPipeline::new(
        LocalStorage::new(".".to_string()),
        cli_config(&temp_dir, "team.csv", None),
    ));

    assert!(matches!(
        engine.dry_run().await,
        Err(SantaError::InsufficientParticipants { count: 1 })
    ));
    Ok(())
}

#[tokio::test]
async fn test_seeded_runs_match() -> Result<()> {
    let temp_dir = TempDir::new()?;
    std::fs::write(temp_dir.path().join("team.csv"), TEAM_CSV)?;

    let mut draws = Vec::new();
    for _ in 0..2 {
        let mut config = cli_config(&temp_dir, "team.csv", None);
        config.seed = Some(2026);
        let pipeline = AssignmentPipeline::new(LocalStorage::new(".".to_string()), config);
        let request = pipeline.extract().await?;
        draws.push(pipeline.transform(request).await?.assignments);
    }

    assert_eq!(draws[0], draws[1]);
    let givers: Vec<&str> = draws[0].iter().map(|p| p.giver_name.as_str()).collect();
    let expected: Vec<Participant> = csv_codec::parse_participants(TEAM_CSV.as_bytes())?;
    let expected_names: Vec<&str> = expected.iter().map(|p| p.display_name.as_str()).collect();
    assert_eq!(givers, expected_names);
    Ok(())
}

#[test]
fn test_email_domain_case_does_not_hide_duplicates() {
    let csv = "Employee_Name,Employee_EmailID\nAlice,alice@x.com\nAlicia,alice@X.COM\nBob,bob@x.com\n";
    let participants = csv_codec::parse_participants(csv.as_bytes()).unwrap();

    match AssignmentService::new().generate(participants, None) {
        Err(SantaError::DuplicateIdentity { identities }) => {
            assert_eq!(identities, vec!["alice@x.com".to_string()]);
        }
        other => panic!("expected DuplicateIdentity, got {:?}", other),
    }
}

#[test]
fn test_history_with_upper_case_domain_still_blocks_repeat() {
    let team = "Employee_Name,Employee_EmailID\nAlice,alice@x.com\nBob,bob@x.com\nCharlie,charlie@x.com\n";
    let history = "Employee_Name,Employee_EmailID,Secret_Child_Name,Secret_Child_EmailID\n\
                   Alice,alice@X.Com,Bob,bob@X.COM\n";
    let participants = csv_codec::parse_participants(team.as_bytes()).unwrap();
    let previous = csv_codec::parse_history(history.as_bytes()).unwrap();

    for _ in 0..20 {
        let assignments = AssignmentService::new()
            .generate(participants.clone(), Some(previous.as_slice()))
            .unwrap();
        let alice = assignments
            .iter()
            .find(|p| p.giver_identity == "alice@x.com")
            .unwrap();
        assert_eq!(alice.receiver_identity, "charlie@x.com");
    }
}
