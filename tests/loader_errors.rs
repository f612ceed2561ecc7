use std::fs;
use std::path::Path;

use ipl_insights::data::{DataLoader, DataSources, LoaderError, Table};
use ipl_insights::stats::StatsCalculator;

const MATCH_HEADER: &str =
    "id,season,team1,team2,toss_winner,winner,result,result_margin,player_of_match\n";

const DELIVERIES: &str = "\
match_id,batter,bowler,batsman_runs,extras_type,is_wicket,dismissal_kind,fielder
1,A,B,4,NA,0,NA,NA
";

fn write_sources(dir: &Path, matches: &str, deliveries: &str) -> DataSources {
    fs::write(dir.join("matches.csv"), matches).expect("write matches");
    fs::write(dir.join("deliveries.csv"), deliveries).expect("write deliveries");
    DataSources::in_dir(dir)
}

#[test]
fn missing_source_is_data_unavailable() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = DataLoader::load(&DataSources::in_dir(dir.path())).unwrap_err();
    assert!(matches!(
        err,
        LoaderError::Missing {
            table: Table::Matches,
            ..
        }
    ));
}

#[test]
fn missing_deliveries_file_is_reported() {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(
        dir.path().join("matches.csv"),
        "id,season,team1,team2,toss_winner,winner,result,result_margin,player_of_match\n\
         1,2010,A,B,A,A,runs,5,P\n",
    )
    .expect("write matches");
    let err = DataLoader::load(&DataSources::in_dir(dir.path())).unwrap_err();
    assert!(matches!(
        err,
        LoaderError::Missing {
            table: Table::Deliveries,
            ..
        }
    ));
}

#[test]
fn missing_required_column_is_reported() {
    let dir = tempfile::tempdir().expect("temp dir");
    let sources = write_sources(
        dir.path(),
        "id,season,team1,team2,toss_winner,result,result_margin,player_of_match\n\
         1,2010,A,B,A,runs,5,P\n",
        DELIVERIES,
    );
    let err = DataLoader::load(&sources).unwrap_err();
    assert!(matches!(
        err,
        LoaderError::MissingColumn {
            table: Table::Matches,
            column: "winner"
        }
    ));
    assert!(err.to_string().contains("winner"));
}

#[test]
fn toss_winner_outside_fixture_is_malformed() {
    let dir = tempfile::tempdir().expect("temp dir");
    let sources = write_sources(
        dir.path(),
        "id,season,team1,team2,toss_winner,winner,result,result_margin,player_of_match\n\
         1,2010,A,B,A,A,runs,5,P\n\
         2,2010,A,B,C,B,wickets,3,Q\n",
        DELIVERIES,
    );
    let err = DataLoader::load(&sources).unwrap_err();
    assert!(matches!(
        err,
        LoaderError::MalformedRow {
            table: Table::Matches,
            row: 2,
            ..
        }
    ));
}

#[test]
fn negative_runs_are_malformed() {
    let dir = tempfile::tempdir().expect("temp dir");
    let sources = write_sources(
        dir.path(),
        "id,season,team1,team2,toss_winner,winner,result,result_margin,player_of_match\n\
         1,2010,A,B,A,A,runs,5,P\n",
        "match_id,batter,bowler,batsman_runs,extras_type,is_wicket,dismissal_kind,fielder\n\
         1,A,B,-4,NA,0,NA,NA\n",
    );
    let err = DataLoader::load(&sources).unwrap_err();
    assert!(matches!(
        err,
        LoaderError::MalformedRow {
            table: Table::Deliveries,
            row: 1,
            ..
        }
    ));
}

fn malformed_match_row(row: &str) -> LoaderError {
    let dir = tempfile::tempdir().expect("temp dir");
    let sources = write_sources(dir.path(), &format!("{MATCH_HEADER}{row}\n"), DELIVERIES);
    DataLoader::load(&sources).unwrap_err()
}

#[test]
fn huge_wicket_margin_scales_without_overflow() {
    let dir = tempfile::tempdir().expect("temp dir");
    let sources = write_sources(
        dir.path(),
        &format!("{MATCH_HEADER}1,2010,A,B,A,B,wickets,500000000,P\n"),
        DELIVERIES,
    );
    let dataset = DataLoader::load(&sources).expect("margin fits the record");
    assert_eq!(dataset.matches()[0].result_margin, Some(500_000_000));

    let summary = StatsCalculator::dominant_wins(&dataset);
    assert_eq!(summary.most_dominant.as_deref(), Some("B"));
    assert_eq!(summary.teams[0].mean_adjusted_margin, 5_000_000_000.0);
}

#[test]
fn out_of_range_margin_is_malformed() {
    let err = malformed_match_row("1,2010,A,B,A,B,wickets,5000000000,P");
    assert!(matches!(
        err,
        LoaderError::MalformedRow {
            table: Table::Matches,
            row: 1,
            ..
        }
    ));
    assert!(err.to_string().contains("out of range"));
}

#[test]
fn fractional_margin_is_malformed() {
    let err = malformed_match_row("1,2010,A,B,A,A,runs,2.5,P");
    assert!(matches!(
        err,
        LoaderError::MalformedRow {
            table: Table::Matches,
            row: 1,
            ..
        }
    ));
    assert!(err.to_string().contains("whole number"));
}

#[test]
fn non_numeric_id_names_the_bad_value() {
    let dir = tempfile::tempdir().expect("temp dir");
    let sources = write_sources(
        dir.path(),
        &format!("{MATCH_HEADER}1,2010,A,B,A,A,runs,5,P\nabc,2010,A,B,B,B,runs,3,Q\n"),
        DELIVERIES,
    );
    let err = DataLoader::load(&sources).unwrap_err();
    assert!(matches!(
        err,
        LoaderError::MalformedRow {
            table: Table::Matches,
            row: 2,
            ..
        }
    ));
    let message = err.to_string();
    assert!(message.contains("not an integer"), "{message}");
    assert!(message.contains("abc"), "{message}");
}

#[test]
fn non_numeric_runs_are_malformed() {
    let dir = tempfile::tempdir().expect("temp dir");
    let sources = write_sources(
        dir.path(),
        &format!("{MATCH_HEADER}1,2010,A,B,A,A,runs,5,P\n"),
        "match_id,batter,bowler,batsman_runs,extras_type,is_wicket,dismissal_kind,fielder\n\
         1,A,B,four,NA,0,NA,NA\n",
    );
    let err = DataLoader::load(&sources).unwrap_err();
    assert!(matches!(
        err,
        LoaderError::MalformedRow {
            table: Table::Deliveries,
            row: 1,
            ..
        }
    ));
    assert!(err.to_string().contains("`batsman_runs` is not an integer"));
}

#[test]
fn header_only_tables_load_as_empty() {
    let dir = tempfile::tempdir().expect("temp dir");
    let sources = write_sources(
        dir.path(),
        "id,season,team1,team2,toss_winner,winner,result,result_margin,player_of_match\n",
        "match_id,batter,bowler,batsman_runs,extras_type,is_wicket,dismissal_kind,fielder\n",
    );
    let dataset = DataLoader::load(&sources).expect("empty tables are valid");
    assert!(dataset.matches().is_empty());
    assert!(dataset.teams().is_empty());
}
