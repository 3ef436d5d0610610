//! Implementation of the `srcmodel inspect` command.
//!
//! Evaluates a build script and prints every component as the build graph
//! would see it: resolved directories, generation status, build
//! dependencies, buckets and declared dependencies.

use std::path::Path;

use anyhow::Result;

use srcmodel_lib::report::{ComponentReport, ProjectReport, SourceSetReport};

use super::load_project;
use crate::output::{OutputFormat, print_info, print_json, print_stat, print_success, symbols, yes_no};

pub fn cmd_inspect(script: &Path, project_dir: Option<&Path>, output: OutputFormat, verbose: bool) -> Result<()> {
  let project = load_project(script, project_dir)?;
  let report = ProjectReport::from(&project);

  if output.is_json() {
    return print_json(&report);
  }

  if report.components.is_empty() {
    print_info("No components declared.");
    return Ok(());
  }

  print_success(&format!(
    "{} component(s) in {}",
    report.components.len(),
    report.root.display()
  ));
  for component in &report.components {
    println!();
    print_component(component, verbose);
  }
  Ok(())
}

fn print_component(component: &ComponentReport, verbose: bool) {
  println!("{} '{}'", component.kind.type_name(), component.name);
  print_stat("Base name", &component.base_name);

  for set in &component.source_sets {
    print_source_set(set, verbose);
  }

  for bucket in &component.buckets {
    let mut line = bucket.name().to_string();
    if !bucket.extends_from().is_empty() {
      line.push_str(&format!(" extends {}", bucket.extends_from().join(", ")));
    }
    print_stat("Configuration", &line);
    for dep in bucket.dependencies() {
      println!("      {} {}", symbols::ARROW, dep);
    }
  }
}

fn print_source_set(set: &SourceSetReport, verbose: bool) {
  let roots: Vec<String> = set.roots.iter().map(|r| r.display().to_string()).collect();
  let origin = if set.explicit { "" } else { " (convention)" };
  let marker = if set.generated {
    format!(" {}", symbols::GENERATED)
  } else {
    String::new()
  };
  print_stat(
    &set.display_name,
    &format!("{}{}{}", roots.join(", "), origin, marker),
  );

  if verbose {
    println!("      may have sources: {}", yes_no(set.may_have_sources));
    if let Some(task) = &set.generator_task {
      println!("      generated by: {}", task.path());
    }
    for task in &set.build_dependencies {
      println!("      built by: {}", task.path());
    }
    for dep in &set.dependencies {
      println!("      {} {}", symbols::ARROW, dep);
    }
  }
}
