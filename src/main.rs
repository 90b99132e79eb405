//! Genlib Lineage - Entry Point
//!
//! Läser en ögonblicksbild och skriver ut namn, nyckeltal och grenvy för en
//! person. Användning: `genlib-lineage <ögonblicksbild.json> <person-id> [--json]`

use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use genlib_lineage::models::hidden_total;
use genlib_lineage::{
    AncestryResolver, BranchFilter, IntegrityReport, LineageError, LineageSettings,
    RelationCounter, SnapshotLoader,
};

struct Args {
    snapshot: PathBuf,
    person_id: String,
    json: bool,
}

fn parse_args() -> Result<Args> {
    let mut positional = Vec::new();
    let mut json = false;

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            _ => positional.push(arg),
        }
    }

    let [snapshot, person_id]: [String; 2] = match positional.try_into() {
        Ok(args) => args,
        Err(_) => bail!("Användning: genlib-lineage <ögonblicksbild.json> <person-id> [--json]"),
    };

    Ok(Args {
        snapshot: PathBuf::from(snapshot),
        person_id,
        json,
    })
}

fn main() -> Result<()> {
    // Initiera logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    tracing::info!("Startar Genlib Lineage v{}", env!("CARGO_PKG_VERSION"));

    let args = parse_args()?;
    let settings = LineageSettings::load();

    let snapshot = SnapshotLoader::load_file(&args.snapshot)?;
    let report = IntegrityReport::check(&snapshot.nodes);
    tracing::info!("{}", report.summary());

    let index = snapshot.index();
    let person = index
        .get(&args.person_id)
        .ok_or_else(|| LineageError::not_found(format!("Person {}", args.person_id)))?;

    let resolver = AncestryResolver::with_settings(&index, &settings);
    let counter = RelationCounter::new(&index);
    let view = BranchFilter::new().filter_indexed(
        person.id.as_str(),
        &index,
        &snapshot.nodes,
    );

    if args.json {
        let output = serde_json::json!({
            "fingerprint": snapshot.fingerprint(),
            "full_name": resolver.full_name(person, &settings.family_name, &settings.name_format),
            "common_name": resolver.common_name(person),
            "relations": counter.summary(person.id.as_str()),
            "branch": view,
        });
        let text = serde_json::to_string_pretty(&output).context("Kunde inte serialisera grenvy")?;
        println!("{}", text);
        return Ok(());
    }

    println!(
        "{}",
        resolver.full_name(person, &settings.family_name, &settings.name_format)
    );
    println!("Kort namn: {}", resolver.common_name(person));
    if let Some(generation) = resolver.generation(person.id.as_str()) {
        println!("Generation: {}", generation);
    }

    let summary = counter.summary(person.id.as_str());
    println!(
        "Barn: {}  Syskon: {}  Ättlingar: {}",
        summary.children, summary.siblings, summary.descendants
    );

    let children = counter.sorted_children(person.id.as_str());
    if !children.is_empty() {
        println!("\nBarn (äldst först):");
        for child in children {
            println!("  {} ({})", child.name, child.hid.as_deref().unwrap_or("-"));
        }
    }

    println!(
        "\nGrenvy: {} personer, {} dolda ättlingar",
        view.len(),
        hidden_total(&view)
    );
    for node in &view {
        match node.hidden_descendant_count {
            Some(count) => println!("  {} [+{}]", node.person.name, count),
            None => println!("  {}", node.person.name),
        }
    }

    Ok(())
}
