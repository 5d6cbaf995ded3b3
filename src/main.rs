use clap::{Args, Parser, Subcommand, ValueEnum};
use feedesk::application::admin::{FeeSummary, report_rows};
use feedesk::application::dashboard::{DashboardAction, DashboardView, StudentDashboard};
use feedesk::application::forms::RegistrationForm;
use feedesk::application::service::{FeeService, REGISTRATION_SUCCESS};
use feedesk::application::session::Session;
use feedesk::config::{LatencyProfile, ServiceConfig};
use feedesk::domain::money::Money;
use feedesk::domain::payment::PaymentMethod;
use feedesk::domain::student::Student;
use feedesk::infrastructure::fixtures;
use feedesk::infrastructure::in_memory::InMemoryStudentStore;
use feedesk::interfaces::csv::fee_report_writer::{FeeReportWriter, REPORT_FILE_NAME};
use feedesk::interfaces::documents::admin_slip::AdminSlip;
use feedesk::interfaces::documents::layout::PageLayout;
use feedesk::interfaces::documents::receipt::Receipt;
use feedesk::interfaces::documents::{ISSUER, course_line, write_document};
use miette::{IntoDiagnostic, Result, miette};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Simulated network latency of the fee service
    #[arg(long, value_enum, global = true, default_value_t = LatencyProfile::Default)]
    latency: LatencyProfile,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show a student's fee dashboard
    Dashboard {
        #[arg(long)]
        roll: String,
        #[arg(long)]
        password: String,
    },
    /// Pay fees as a student and write the receipt
    Pay {
        #[arg(long)]
        roll: String,
        #[arg(long)]
        password: String,
        #[command(flatten)]
        payment: PayArgs,
    },
    /// Generate the no-dues admin slip for a fully paid student
    Slip {
        #[arg(long)]
        roll: String,
        #[arg(long)]
        password: String,
        #[arg(long, default_value = ".")]
        output_dir: PathBuf,
    },
    /// Register a new student
    Register(RegisterArgs),
    /// Fee collection totals and per-student status (admin)
    Summary {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
        #[arg(long, value_enum, default_value_t = Format::Table)]
        format: Format,
    },
    /// Export the fee report as CSV (admin)
    Report {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
        #[command(flatten)]
        output: ReportArgs,
    },
    /// Read commands from stdin, one per line, and run them in one session
    Session,
}

#[derive(Args)]
struct PayArgs {
    /// Amount to pay. Defaults to the full due amount.
    #[arg(long)]
    amount: Option<Money>,
    /// card, gpay or phonepe
    #[arg(long, default_value = "gpay")]
    method: PaymentMethod,
    /// Required for card payments
    #[arg(long)]
    card_number: Option<String>,
    /// Directory the receipt (and admin slip) are written to
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,
}

#[derive(Args)]
struct RegisterArgs {
    #[arg(long)]
    roll: String,
    #[arg(long)]
    name: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    phone: String,
    #[arg(long)]
    password: String,
    #[arg(long)]
    confirm_password: String,
}

#[derive(Args)]
struct ReportArgs {
    /// Write to this file instead of stdout. Without a value, writes
    /// student_fees_report.csv
    #[arg(long, num_args = 0..=1, default_missing_value = REPORT_FILE_NAME)]
    output: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Table,
    Json,
}

/// One line of a `session` script.
#[derive(Parser)]
#[command(no_binary_name = true, disable_version_flag = true)]
struct SessionLine {
    #[command(subcommand)]
    command: SessionCommand,
}

#[derive(Subcommand)]
enum SessionCommand {
    /// Log in with a roll number, or as the admin
    Login {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },
    Logout,
    Register(RegisterArgs),
    Dashboard,
    Pay(PayArgs),
    Slip {
        #[arg(long, default_value = ".")]
        output_dir: PathBuf,
    },
    Summary {
        #[arg(long, value_enum, default_value_t = Format::Table)]
        format: Format,
    },
    Report(ReportArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("feedesk=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut session = open_session(cli.latency).await?;

    match cli.command {
        Command::Dashboard { roll, password } => {
            session.login(&roll, &password).await.into_diagnostic()?;
            show_dashboard(&session)?;
        }
        Command::Pay {
            roll,
            password,
            payment,
        } => {
            session.login(&roll, &password).await.into_diagnostic()?;
            pay(&mut session, payment).await?;
        }
        Command::Slip {
            roll,
            password,
            output_dir,
        } => {
            session.login(&roll, &password).await.into_diagnostic()?;
            write_slip(&session, &output_dir)?;
        }
        Command::Register(args) => register(&session, args).await?,
        Command::Summary {
            username,
            password,
            format,
        } => {
            session.login(&username, &password).await.into_diagnostic()?;
            print_summary(&session, format)?;
        }
        Command::Report {
            username,
            password,
            output,
        } => {
            session.login(&username, &password).await.into_diagnostic()?;
            export_report(&session, output.output)?;
        }
        Command::Session => run_session(&mut session).await?,
    }

    Ok(())
}

async fn open_session(latency: LatencyProfile) -> Result<Session> {
    let store = InMemoryStudentStore::with_students(fixtures::seed_students());
    let service = FeeService::new(Box::new(store), ServiceConfig::new(latency.into()));
    Session::open(service).await.into_diagnostic()
}

/// Runs stdin line by line against one session. A failing line is reported and
/// the script carries on; the exit status reflects whether any line failed.
async fn run_session(session: &mut Session) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut failures = 0usize;

    while let Some(line) = lines.next_line().await.into_diagnostic()? {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let outcome = match split_words(line) {
            Ok(words) => match SessionLine::try_parse_from(words) {
                Ok(parsed) => run_session_command(session, parsed.command).await,
                Err(e) => Err(miette!("{e}")),
            },
            Err(e) => Err(miette!("{e}")),
        };
        if let Err(report) = outcome {
            eprintln!("{report:?}");
            failures += 1;
        }
    }

    if failures > 0 {
        return Err(miette!("{failures} session command(s) failed"));
    }
    Ok(())
}

async fn run_session_command(session: &mut Session, command: SessionCommand) -> Result<()> {
    match command {
        SessionCommand::Login { username, password } => {
            let user = session.login(&username, &password).await.into_diagnostic()?;
            println!("Logged in as {} ({})", user.display_name(), user.role());
        }
        SessionCommand::Logout => {
            session.logout();
            println!("Logged out");
        }
        SessionCommand::Register(args) => register(session, args).await?,
        SessionCommand::Dashboard => show_dashboard(session)?,
        SessionCommand::Pay(args) => pay(session, args).await?,
        SessionCommand::Slip { output_dir } => write_slip(session, &output_dir)?,
        SessionCommand::Summary { format } => {
            session.refresh().await.into_diagnostic()?;
            print_summary(session, format)?;
        }
        SessionCommand::Report(args) => {
            session.refresh().await.into_diagnostic()?;
            export_report(session, args.output)?;
        }
    }
    Ok(())
}

/// Splits a script line on whitespace. Single or double quotes keep a value
/// with spaces together.
fn split_words(line: &str) -> std::result::Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_word = true;
            }
            None if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if quote.is_some() {
        return Err(format!("unterminated quote in: {line}"));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

fn show_dashboard(session: &Session) -> Result<()> {
    let student = session.current_student().into_diagnostic()?;
    print_dashboard(student);
    Ok(())
}

async fn register(session: &Session, args: RegisterArgs) -> Result<()> {
    let form = RegistrationForm {
        id: args.roll,
        name: args.name,
        email: args.email,
        phone: args.phone,
        password: args.password,
        confirm_password: args.confirm_password,
    };
    let data = form.validate().into_diagnostic()?;
    let student = session.register(data).await.into_diagnostic()?;
    println!("{REGISTRATION_SUCCESS}");
    println!(
        "{} ({}) registered, fees due {}",
        student.name,
        student.id,
        student.due().inr()
    );
    Ok(())
}

async fn pay(session: &mut Session, args: PayArgs) -> Result<()> {
    let student = session.current_student().into_diagnostic()?.clone();
    let mut dashboard = StudentDashboard::new();

    let mut form = dashboard
        .open_payment(&student)
        .into_diagnostic()?
        .with_method(args.method);
    if let Some(amount) = args.amount {
        form = form.with_amount(amount);
    }
    if let Some(card) = args.card_number
        && !form.set_card_number(&card)
    {
        warn!("ignoring malformed card number");
    }

    let payment = dashboard
        .submit_payment(session, &form)
        .await
        .into_diagnostic()?
        .clone();
    let student = session.current_student().into_diagnostic()?;
    let layout = PageLayout::a4_portrait();
    let output_dir = args.output_dir.as_path();

    println!("Payment Successful!");
    println!("Transaction ID: {}", payment.transaction_id);
    println!("Amount Paid: {} via {}", payment.amount.inr(), payment.method);

    if dashboard.view() == DashboardView::FullPaymentSuccess {
        println!("Congratulations, all your dues have been cleared.");
        println!("Status: {}", student.status());
        println!("Balance Due: {}", student.due().inr());
        let receipt = Receipt::final_payment(student, &payment);
        let slip = AdminSlip::new(student, payment.paid_at.date_naive());
        for path in [
            write_document(&receipt, output_dir, &layout).into_diagnostic()?,
            write_document(&slip, output_dir, &layout).into_diagnostic()?,
        ] {
            println!("Written {}", path.display());
        }
    } else {
        println!("Status: {}", student.status());
        println!("Balance Due: {}", student.due().inr());
        let receipt = Receipt::new(student, &payment);
        let path = write_document(&receipt, output_dir, &layout).into_diagnostic()?;
        println!("Written {}", path.display());
    }
    Ok(())
}

fn write_slip(session: &Session, output_dir: &Path) -> Result<()> {
    let student = session.current_student().into_diagnostic()?;
    StudentDashboard::new()
        .open_admin_slip(student)
        .into_diagnostic()?;
    let slip = AdminSlip::new(student, chrono::Local::now().date_naive());
    let path =
        write_document(&slip, output_dir, &PageLayout::a4_portrait()).into_diagnostic()?;
    println!("Admin slip written to {}", path.display());
    Ok(())
}

fn export_report(session: &Session, output: Option<PathBuf>) -> Result<()> {
    session.current_admin().into_diagnostic()?;
    let rows = report_rows(session.students());
    match output {
        Some(path) => {
            let file = File::create(&path).into_diagnostic()?;
            let written = FeeReportWriter::new(file)
                .write_report(&rows)
                .into_diagnostic()?;
            println!("Exported {written} students to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            FeeReportWriter::new(stdout.lock())
                .write_report(&rows)
                .into_diagnostic()?;
        }
    }
    Ok(())
}

fn print_dashboard(student: &Student) {
    println!("{ISSUER}");
    println!();
    println!("Name:        {}", student.name);
    println!("Roll Number: {}", student.id);
    println!("Email:       {}", student.email);
    println!("Phone:       {}", student.phone);
    println!("Course:      {}", course_line(student));
    println!();
    println!("Total Fees:  {}", student.total_fees.inr());
    println!("Paid Amount: {}", student.paid_amount.inr());
    println!("Due Amount:  {}", student.due().inr());
    println!("Status:      {}", student.status());
    println!();
    println!("Fee Breakdown");
    for (head, amount) in student.fee_breakdown.entries() {
        println!("  {head:<10} {}", amount.inr());
    }
    println!("  {:<10} {}", "Total", student.fee_breakdown.total().inr());
    println!();
    match DashboardAction::for_student(student) {
        DashboardAction::PayNow => println!("Pay Now - {}", student.due().inr()),
        DashboardAction::GenerateAdminSlip => println!("Generate Admin Slip"),
    }
}

fn print_summary(session: &Session, format: Format) -> Result<()> {
    session.current_admin().into_diagnostic()?;
    let students = session.students();
    let summary = FeeSummary::from_roster(students).into_diagnostic()?;
    let rows = report_rows(students);

    match format {
        Format::Json => {
            let body = serde_json::json!({ "summary": summary, "students": rows });
            println!("{}", serde_json::to_string_pretty(&body).into_diagnostic()?);
        }
        Format::Table => {
            println!("Students:        {}", summary.students);
            println!("Total Fees:      {}", summary.total_fees.inr());
            println!("Total Collected: {}", summary.total_collected.inr());
            println!("Total Due:       {}", summary.total_due.inr());
            println!();
            println!(
                "{:<10} {:<18} {:>12} {:>12} {:>12}  {}",
                "Roll No", "Name", "Total", "Paid", "Due", "Status"
            );
            for row in rows {
                println!(
                    "{:<10} {:<18} {:>12} {:>12} {:>12}  {}",
                    row.roll_number,
                    row.name,
                    row.total_fees.inr(),
                    row.paid_amount.inr(),
                    row.due_amount.inr(),
                    row.status
                );
            }
        }
    }
    Ok(())
}
