use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use project_catalog::catalog::filter::FilterCriteria;
use project_catalog::catalog::Catalog;
use project_catalog::config;
use project_catalog::form::{FormPhase, ProjectForm};
use project_catalog::models::{BillingType, Category, Project, Status};
use project_catalog::validate::ProjectField;

/// Interactive browser for a project catalog: search and filter the
/// records, and add new ones through a validated form.
#[derive(Debug, Parser)]
#[command(name = "project-catalog")]
struct Cli {
    /// JSON file with the initial catalog (overrides CATALOG_SEED)
    #[arg(long)]
    seed: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    // Load configuration
    let app_config = config::init()?;

    // Build the canonical catalog, seeded from a file when one is given
    let seed = cli.seed.or_else(|| app_config.catalog_seed.clone());
    let mut catalog = match seed {
        Some(path) => load_catalog(&path)?,
        None => Catalog::new(),
    };

    info!(projects = catalog.len(), "catalog ready");
    println!("Project catalog ready: {} project(s) loaded.", catalog.len());
    println!("Type 'help' for the list of commands.");

    run_session(&mut catalog)?;

    println!("Bye!");

    Ok(())
}

fn load_catalog(path: &Path) -> Result<Catalog> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading catalog seed {}", path.display()))?;
    let records: Vec<Project> = serde_json::from_str(&raw)
        .with_context(|| format!("parsing catalog seed {}", path.display()))?;

    Ok(Catalog::from_records(records)?)
}

fn run_session(catalog: &mut Catalog) -> Result<()> {
    // The session owns the current criteria and one creation form; every
    // criteria change re-runs the filter and re-renders the result.
    let mut criteria = FilterCriteria::default();
    let mut form = ProjectForm::new();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let line = line.trim();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command {
            "" => {}
            "quit" | "exit" => break,
            "help" => print_help(),
            "list" => render_projects(&catalog.filter(&criteria)),
            "search" => {
                criteria.search_text = rest.to_string();
                render_projects(&catalog.filter(&criteria));
            }
            "category" => {
                if set_category(&mut criteria, rest) {
                    render_projects(&catalog.filter(&criteria));
                }
            }
            "status" => {
                if set_status(&mut criteria, rest) {
                    render_projects(&catalog.filter(&criteria));
                }
            }
            "type" => {
                if set_billing_type(&mut criteria, rest) {
                    render_projects(&catalog.filter(&criteria));
                }
            }
            "clear" => {
                criteria = FilterCriteria::default();
                render_projects(&catalog.filter(&criteria));
            }
            "show" => show_project(catalog, rest),
            "set" => set_form_field(&mut form, rest),
            "form" => render_form(&form),
            "submit" => submit_form(&mut form, catalog),
            _ => println!("Unknown command '{command}'. Type 'help' for the list of commands."),
        }
    }

    Ok(())
}

fn print_help() {
    println!("Filtering:");
    println!("  list                   show projects matching the current filters");
    println!("  search [text]          set or clear the free-text search");
    println!("  category [value|-]     pin or clear the category facet");
    println!("  status [value|-]       pin or clear the status facet");
    println!("  type [value|-]         pin or clear the billing type facet");
    println!("  clear                  drop all filters");
    println!("  show <id>              full detail of one project");
    println!("Creating:");
    println!("  set <field> <value>    fill one form field (blank value clears it)");
    println!("  form                   show the form and any validation errors");
    println!("  submit                 validate the form and add the project");
    println!("Other:");
    println!("  help, quit");
}

// Facet handlers return false when the argument did not parse, so the
// caller can skip the re-render.

fn set_category(criteria: &mut FilterCriteria, arg: &str) -> bool {
    if arg.is_empty() || arg == "-" {
        criteria.category = None;
        return true;
    }
    match Category::parse(arg) {
        Some(category) => {
            criteria.category = Some(category);
            true
        }
        None => {
            println!("Unknown category '{arg}'. Valid values: {}.", labels(&Category::ALL));
            false
        }
    }
}

fn set_status(criteria: &mut FilterCriteria, arg: &str) -> bool {
    if arg.is_empty() || arg == "-" {
        criteria.status = None;
        return true;
    }
    match Status::parse(arg) {
        Some(status) => {
            criteria.status = Some(status);
            true
        }
        None => {
            println!("Unknown status '{arg}'. Valid values: {}.", labels(&Status::ALL));
            false
        }
    }
}

fn set_billing_type(criteria: &mut FilterCriteria, arg: &str) -> bool {
    if arg.is_empty() || arg == "-" {
        criteria.billing_type = None;
        return true;
    }
    match BillingType::parse(arg) {
        Some(billing_type) => {
            criteria.billing_type = Some(billing_type);
            true
        }
        None => {
            println!(
                "Unknown billing type '{arg}'. Valid values: {}.",
                labels(&BillingType::ALL)
            );
            false
        }
    }
}

fn labels<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn render_projects(projects: &[Project]) {
    if projects.is_empty() {
        println!("No projects match the current filters.");
        return;
    }

    println!(
        "{:>4}  {:<24} {:<18} {:<12} {:<17} {:<9} {:>12}  Dates",
        "Id", "Name", "Client", "Category", "Status", "Type", "Value"
    );
    for project in projects {
        println!(
            "{:>4}  {:<24} {:<18} {:<12} {:<17} {:<9} {:>12.2}  {}",
            project.id,
            project.name,
            project.client,
            project.category,
            project.status,
            project.billing_type,
            project.value,
            format_dates(project),
        );
    }
    println!("{} project(s).", projects.len());
}

fn format_dates(project: &Project) -> String {
    match project.end_date {
        Some(end_date) => format!(
            "{} to {}",
            project.start_date.format("%Y-%m-%d"),
            end_date.format("%Y-%m-%d")
        ),
        None => format!("{} to Present", project.start_date.format("%Y-%m-%d")),
    }
}

fn show_project(catalog: &Catalog, arg: &str) {
    let Ok(id) = arg.parse::<i32>() else {
        println!("Usage: show <id>");
        return;
    };
    match catalog.get(id) {
        Some(project) => {
            println!("Project {}", project.id);
            println!("  Name:     {}", project.name);
            println!("  Client:   {}", project.client);
            println!("  Category: {}", project.category);
            println!("  Status:   {}", project.status);
            println!("  Type:     {}", project.billing_type);
            println!("  Value:    {:.2}", project.value);
            println!("  Dates:    {}", format_dates(project));
            if project.team.is_empty() {
                println!("  Team:     (unassigned)");
            } else {
                println!("  Team:     {}", project.team.join(", "));
            }
        }
        None => println!("No project with id {id}."),
    }
}

fn set_form_field(form: &mut ProjectForm, rest: &str) {
    let (field, value) = match rest.split_once(char::is_whitespace) {
        Some((field, value)) => (field, value.trim()),
        None => (rest, ""),
    };
    match ProjectField::parse(field) {
        Some(field) => form.set(field, value),
        None => println!("Unknown field '{field}'. Try 'form' to see the field names."),
    }
}

fn render_form(form: &ProjectForm) {
    let input = form.input();
    let text = |value: &Option<String>| value.clone().unwrap_or_default();

    println!("  name:         {}", text(&input.name));
    println!("  client:       {}", text(&input.client));
    println!("  category:     {}", text(&input.category));
    println!("  status:       {}", text(&input.status));
    println!("  billing_type: {}", text(&input.billing_type));
    println!("  value:        {}", text(&input.value));
    println!("  start_date:   {}", text(&input.start_date));
    println!("  end_date:     {}", text(&input.end_date));
    println!("  team:         {}", input.team.join(", "));

    if form.phase() == FormPhase::Rejected {
        println!("Last submission was rejected:");
        for error in form.errors() {
            println!("  {error}");
        }
    }
}

fn submit_form(form: &mut ProjectForm, catalog: &mut Catalog) {
    match form.submit() {
        Some(draft) => {
            let id = catalog.append(draft);
            println!("Project {id} added to the catalog.");
        }
        None => {
            println!("Submission rejected:");
            for error in form.errors() {
                println!("  {error}");
            }
            println!("The entered values were kept; fix the fields and submit again.");
        }
    }
}
