use std::path::{Path, PathBuf};

use ce_app::{
    AppError, AppResult, ChartData, DashboardConfig, Event, Level, Session, chart_data,
    equipment_row, load_config, summary_cards,
};
use ce_client::{EquipmentApi, HttpClient, report_file_name};
use ce_core::{ChartKind, EquipmentRecord, TypeFilter, UploadId};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ce-cli")]
#[command(about = "Chemical equipment dashboard - command line client", long_about = None)]
struct Cli {
    /// Path to a dashboard YAML config
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Override the API base URL
    #[arg(long, global = true)]
    api_base: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List uploads, most recent first
    Uploads,
    /// Show summary statistics for an upload
    Summary {
        /// Upload ID
        upload_id: UploadId,
    },
    /// List equipment rows for an upload
    Equipment {
        /// Upload ID
        upload_id: UploadId,
        /// Restrict to one equipment type (Pump, Valve, Reactor)
        #[arg(long = "type", default_value = "")]
        type_filter: TypeFilter,
    },
    /// Upload a CSV file
    Upload {
        /// Path to the CSV file
        path: PathBuf,
    },
    /// Download the PDF report for an upload
    Report {
        /// Upload ID
        upload_id: UploadId,
        /// Output file (defaults to report_upload_<id>.pdf)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Print the report URL instead of downloading
        #[arg(long)]
        url_only: bool,
    },
    /// Print a dashboard snapshot: summary cards and one chart series
    Show {
        /// Upload ID (defaults to the most recent)
        #[arg(long)]
        upload: Option<UploadId>,
        /// Equipment type filter
        #[arg(long = "type", default_value = "")]
        type_filter: TypeFilter,
        /// Chart to print (type, flow, scatter, temp, trend)
        #[arg(long, default_value = "type")]
        chart: ChartKind,
    },
}

fn main() -> AppResult<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => DashboardConfig::default(),
    };
    if let Some(base) = cli.api_base {
        config.api.base_url = base;
    }
    tracing::debug!(base_url = %config.api.base_url, "using API");

    let api = HttpClient::new(&config.api.base_url, config.api.timeout())?;

    match cli.command {
        Commands::Uploads => cmd_uploads(&api),
        Commands::Summary { upload_id } => cmd_summary(&api, upload_id),
        Commands::Equipment {
            upload_id,
            type_filter,
        } => cmd_equipment(&api, upload_id, type_filter),
        Commands::Upload { path } => cmd_upload(api, &config, path),
        Commands::Report {
            upload_id,
            output,
            url_only,
        } => cmd_report(&api, upload_id, output.as_deref(), url_only),
        Commands::Show {
            upload,
            type_filter,
            chart,
        } => cmd_show(api, &config, upload, type_filter, chart),
    }
}

fn cmd_uploads(api: &HttpClient) -> AppResult<()> {
    let uploads = api.list_uploads()?;
    if uploads.is_empty() {
        println!("No uploads yet");
        return Ok(());
    }
    for upload in &uploads {
        match upload.total_equipment {
            Some(total) => println!("  {} ({} items)", upload.label(), total),
            None => println!("  {}", upload.label()),
        }
    }
    Ok(())
}

fn cmd_summary(api: &HttpClient, upload_id: UploadId) -> AppResult<()> {
    let report = api.summary(upload_id)?;
    println!("Summary for upload {upload_id}:");
    for card in summary_cards(&report.summary) {
        println!("  {:<16} {}", card.label, card.value);
    }
    if !report.type_distribution.is_empty() {
        println!("Type distribution:");
        for entry in &report.type_distribution {
            println!("  {:<16} {}", entry.equipment_type, entry.count);
        }
    }
    Ok(())
}

fn cmd_equipment(api: &HttpClient, upload_id: UploadId, filter: TypeFilter) -> AppResult<()> {
    let records = api.filter_equipment(upload_id, filter)?;
    print_equipment(&records);
    Ok(())
}

fn cmd_upload(api: HttpClient, config: &DashboardConfig, path: PathBuf) -> AppResult<()> {
    println!("Uploading {}", path.display());
    let mut session = Session::new(api, config.upload_failure);
    session.dispatch(Event::SetPendingFile(Some(path)));
    session.dispatch(Event::SubmitUpload);

    let failed = print_notifications(&session);
    if let Some(upload_id) = session.state().selection().upload_id {
        println!("Current upload: {upload_id}");
    }
    if failed {
        return Err(AppError::InvalidInput("upload was not accepted".to_string()));
    }
    Ok(())
}

fn cmd_report(
    api: &HttpClient,
    upload_id: UploadId,
    output: Option<&Path>,
    url_only: bool,
) -> AppResult<()> {
    if url_only {
        println!("{}", api.report_url(upload_id));
        return Ok(());
    }

    let bytes = api.download_report(upload_id)?;
    let path = match output {
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(report_file_name(upload_id)),
    };
    std::fs::write(&path, &bytes)?;
    println!("✓ Saved report to {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}

fn cmd_show(
    api: HttpClient,
    config: &DashboardConfig,
    upload: Option<UploadId>,
    type_filter: TypeFilter,
    chart: ChartKind,
) -> AppResult<()> {
    let mut session = Session::new(api, config.upload_failure);
    session.dispatch(Event::SetTypeFilter(type_filter));
    session.dispatch(Event::SetChartKind(chart));
    session.dispatch(Event::Mounted);
    if upload.is_some() {
        session.dispatch(Event::SelectUpload(upload));
    }

    if print_notifications(&session) {
        return Err(AppError::InvalidInput(
            "dashboard could not be loaded".to_string(),
        ));
    }

    let state = session.state();
    let Some(upload_id) = state.selection().upload_id else {
        return Err(AppError::NoUploadSelected);
    };
    if let Some(wanted) = upload {
        if wanted != upload_id {
            return Err(AppError::InvalidInput(format!(
                "upload {wanted} is not available"
            )));
        }
    }

    if let Some(current) = state.upload_list().iter().find(|u| u.id == upload_id) {
        println!("{}", current.label());
    }
    if let Some(report) = state.summary().data() {
        for card in summary_cards(&report.summary) {
            println!("  {:<16} {}", card.label, card.value);
        }
    }

    println!();
    println!("{} [{}]", chart.title(), type_filter.label());
    match chart_data(chart, state) {
        Some(ChartData::Bar(series)) => {
            for (label, value) in series.labels.iter().zip(&series.data) {
                println!("  {:<16} {}", label, value);
            }
        }
        Some(ChartData::Scatter(series)) | Some(ChartData::Line(series)) => {
            println!("  {:>12} {:>12}", series.x_label, series.y_label);
            for [x, y] in &series.points {
                println!("  {:>12} {:>12}", x, y);
            }
        }
        None => println!("  (no data)"),
    }
    Ok(())
}

fn print_equipment(records: &[EquipmentRecord]) {
    if records.is_empty() {
        println!("No equipment found");
        return;
    }
    println!(
        "  {:<20} {:<10} {:>10} {:>10} {:>12}",
        "Name", "Type", "Flowrate", "Pressure", "Temperature"
    );
    for r in records {
        let [name, kind, flowrate, pressure, temperature] = equipment_row(r);
        println!(
            "  {:<20} {:<10} {:>10} {:>10} {:>12}",
            name, kind, flowrate, pressure, temperature
        );
    }
}

/// Print accumulated notifications; true if any of them is an error.
fn print_notifications<A: EquipmentApi>(session: &Session<A>) -> bool {
    let mut failed = false;
    for n in session.state().notifications() {
        let marker = match n.level {
            Level::Success => "✓",
            Level::Warning => "!",
            Level::Error => {
                failed = true;
                "✗"
            }
        };
        println!("{marker} {}", n.message);
    }
    failed
}
