//! Integration tests for the resume ranker

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Object, Stream};
use resume_ranker::config::{Config, OutputFormat};
use resume_ranker::error::ResumeRankerError;
use resume_ranker::input::InputManager;
use resume_ranker::output::formatter::ReportGenerator;
use resume_ranker::output::RankingReport;
use resume_ranker::processing::RankingEngine;
use std::fs;
use std::path::{Path, PathBuf};

/// Build a PDF where each page holds the given lines, one text object per line.
fn build_pdf(pages: &[&[&str]]) -> Vec<u8> {
    let mut doc = lopdf::Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for lines in pages {
        let mut operations = Vec::new();
        for (index, line) in lines.iter().enumerate() {
            let y = 720 - 16 * index as i64;
            operations.push(Operation::new("BT", vec![]));
            operations.push(Operation::new("Tf", vec!["F1".into(), 12.into()]));
            operations.push(Operation::new("Td", vec![72.into(), y.into()]));
            operations.push(Operation::new("Tj", vec![Object::string_literal(*line)]));
            operations.push(Operation::new("ET", vec![]));
        }
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    bytes
}

fn write_pdf(dir: &Path, name: &str, pages: &[&[&str]]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, build_pdf(pages)).unwrap();
    path
}

fn engineer_pdf(dir: &Path, name: &str) -> PathBuf {
    write_pdf(
        dir,
        name,
        &[
            &["Jane Doe", "jane.doe@example.com", "555-123-4567"],
            &["python backend engineer", "django and postgres services"],
        ],
    )
}

fn chef_pdf(dir: &Path, name: &str) -> PathBuf {
    write_pdf(
        dir,
        name,
        &[&["Pierre Martin", "pierre@patisserie.fr", "french pastry chef"]],
    )
}

#[tokio::test]
async fn test_documents_load_in_upload_order() {
    let dir = tempfile::tempdir().unwrap();
    let second = chef_pdf(dir.path(), "b_chef.pdf");
    let first = engineer_pdf(dir.path(), "a_engineer.pdf");

    let documents = InputManager::new()
        .load_documents(&[second, first])
        .await
        .unwrap();

    let names: Vec<&str> = documents.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["b_chef.pdf", "a_engineer.pdf"]);
    assert!(documents.iter().all(|d| d.bytes.starts_with(b"%PDF")));
}

#[tokio::test]
async fn test_directory_expands_to_sorted_pdfs() {
    let dir = tempfile::tempdir().unwrap();
    chef_pdf(dir.path(), "zoe.pdf");
    engineer_pdf(dir.path(), "adam.pdf");
    fs::write(dir.path().join("notes.txt"), "not a resume").unwrap();

    let documents = InputManager::new()
        .load_documents(&[dir.path().to_path_buf()])
        .await
        .unwrap();

    let names: Vec<&str> = documents.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["adam.pdf", "zoe.pdf"]);
}

#[tokio::test]
async fn test_missing_and_unsupported_inputs() {
    let dir = tempfile::tempdir().unwrap();
    let manager = InputManager::new();

    let missing = manager
        .load_documents(&[dir.path().join("ghost.pdf")])
        .await;
    assert!(matches!(missing, Err(ResumeRankerError::InvalidInput(_))));

    let text_file = dir.path().join("resume.txt");
    fs::write(&text_file, "Jane Doe").unwrap();
    let unsupported = manager.load_documents(&[text_file]).await;
    assert!(matches!(
        unsupported,
        Err(ResumeRankerError::UnsupportedFormat(_))
    ));
}

#[tokio::test]
async fn test_job_description_sources() {
    let dir = tempfile::tempdir().unwrap();
    let manager = InputManager::new();

    let txt = dir.path().join("job.txt");
    fs::write(&txt, "\n  Python backend engineer\n").unwrap();
    assert_eq!(
        manager.load_job_description(&txt).await.unwrap(),
        "Python backend engineer"
    );

    let md = dir.path().join("job.md");
    fs::write(&md, "## Role\n\nA **Python** backend engineer\n").unwrap();
    let text = manager.load_job_description(&md).await.unwrap();
    assert!(text.contains("Python backend engineer"));
    assert!(!text.contains("**"));

    let pdf = engineer_pdf(dir.path(), "job.pdf");
    assert!(manager.load_job_description(&pdf).await.is_err());
}

#[tokio::test]
async fn test_rank_generated_resumes() {
    let dir = tempfile::tempdir().unwrap();
    let paths = vec![
        chef_pdf(dir.path(), "chef.pdf"),
        engineer_pdf(dir.path(), "engineer.pdf"),
    ];
    let documents = InputManager::new().load_documents(&paths).await.unwrap();

    let result = RankingEngine::default()
        .rank_documents("Python backend engineer", &documents)
        .unwrap();

    assert_eq!(result.len(), 2);
    let top = result.top().unwrap();
    assert_eq!(top.file_name, "engineer.pdf");
    assert_eq!(top.name, "Jane Doe");
    assert_eq!(top.email, "jane.doe@example.com");
    assert_eq!(top.phone, "555-123-4567");
    assert!(top.score > 0.0);

    let chef = &result.records()[1];
    assert_eq!(chef.file_name, "chef.pdf");
    assert_eq!(chef.name, "Pierre Martin");
    assert_eq!(chef.email, "pierre@patisserie.fr");
    assert_eq!(chef.phone, "Unknown");
    assert_eq!(chef.score, 0.0);
}

#[tokio::test]
async fn test_invalid_pdf_policy() {
    let dir = tempfile::tempdir().unwrap();
    let broken = dir.path().join("broken.pdf");
    fs::write(&broken, b"%PDF-1.5 truncated").unwrap();
    let paths = vec![broken, engineer_pdf(dir.path(), "engineer.pdf")];
    let documents = InputManager::new().load_documents(&paths).await.unwrap();

    let fatal = RankingEngine::default().rank_documents("python", &documents);
    assert!(matches!(fatal, Err(ResumeRankerError::PdfParse { .. })));

    let result = RankingEngine::default()
        .with_skip_unparseable(true)
        .rank_documents("python", &documents)
        .unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(result.skipped().len(), 1);
    assert_eq!(result.skipped()[0].file_name, "broken.pdf");
}

#[tokio::test]
async fn test_report_from_ranked_pdfs() {
    let dir = tempfile::tempdir().unwrap();
    let paths = vec![
        chef_pdf(dir.path(), "chef.pdf"),
        engineer_pdf(dir.path(), "engineer.pdf"),
    ];
    let documents = InputManager::new().load_documents(&paths).await.unwrap();
    let config = Config::default();

    let result = RankingEngine::default()
        .rank_documents("Python backend engineer", &documents)
        .unwrap();
    let report = RankingReport::from_result(
        &result,
        "Python backend engineer",
        config.output.score_precision,
    );

    let json = ReportGenerator::with_options(false, true, true)
        .generate_report(&report, &OutputFormat::Json)
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["rows"][0]["file_name"], "engineer.pdf");
    assert_eq!(parsed["rows"][0]["rank"], 1);
    assert_eq!(parsed["rows"][1]["contact"], "Unknown");
    assert_eq!(parsed["metadata"]["documents_ranked"], 2);
}
