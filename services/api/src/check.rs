use crate::infra::load_seat_matrix;
use clap::Args;
use seat_predictor::config::AppConfig;
use seat_predictor::error::AppError;
use seat_predictor::predictor::{
    Category, EligibilityDecision, EligibilityError, EligibilityEvaluator, InputField,
    PredictorSession, Programme, SeatMatrix, DISCLAIMER,
};
use std::io::Write;

#[derive(Args, Debug)]
pub(crate) struct CheckArgs {
    /// Programme code or name (3yr, 5yr)
    #[arg(long)]
    pub(crate) programme: String,
    /// Reservation category as printed on the seat matrix (e.g. "State Merit", SC, EWS)
    #[arg(long)]
    pub(crate) category: String,
    /// CEE overall rank
    #[arg(long)]
    pub(crate) overall_rank: String,
    /// Rank within the reservation category, if published
    #[arg(long)]
    pub(crate) category_rank: Option<String>,
    /// Confirm the liability disclaimer has been read
    #[arg(long)]
    pub(crate) accept_disclaimer: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct MatrixArgs {
    /// Limit output to one programme
    #[arg(long)]
    pub(crate) programme: Option<String>,
    /// Emit the sheet as CSV instead of a listing
    #[arg(long)]
    pub(crate) csv: bool,
}

pub(crate) fn run_check(args: CheckArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let evaluator = EligibilityEvaluator::new(load_seat_matrix(&config.seat_matrix)?);

    if !args.accept_disclaimer {
        println!("{DISCLAIMER}");
        println!("\nRe-run with --accept-disclaimer to check eligibility.");
    }

    let decision = check_with(&evaluator, &args)?;
    render_decision(&evaluator, &args, &decision);
    Ok(())
}

/// Drive a form session the way the interactive front end does.
pub(crate) fn check_with(
    evaluator: &EligibilityEvaluator,
    args: &CheckArgs,
) -> Result<EligibilityDecision, AppError> {
    let programme = args.programme.parse::<Programme>()?;
    let category = args.category.parse::<Category>()?;

    let mut session = PredictorSession::new();
    if args.accept_disclaimer {
        session.acknowledge_disclaimer();
    }
    session.select_programme(evaluator, programme)?;
    session.select_category(evaluator, category)?;

    let decision = session.submit(
        evaluator,
        &args.overall_rank,
        args.category_rank.as_deref().unwrap_or_default(),
    )?;
    Ok(*decision)
}

fn render_decision(
    evaluator: &EligibilityEvaluator,
    args: &CheckArgs,
    decision: &EligibilityDecision,
) {
    let marker = if decision.eligible { "[yes]" } else { "[no]" };
    println!("Seat eligibility ({})", evaluator.matrix().cycle());
    println!(
        "Programme: {} | Category: {} | Overall rank: {} | Category rank: {}",
        decision.programme.label(),
        args.category.trim(),
        args.overall_rank.trim(),
        args.category_rank.as_deref().map(str::trim).unwrap_or("-")
    );
    println!("{marker} {}", decision.message());
    println!("Basis: {}", decision.basis.summary());
}

pub(crate) fn run_matrix(args: MatrixArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let matrix = load_seat_matrix(&config.seat_matrix)?;
    let programme = args
        .programme
        .as_deref()
        .map(str::parse::<Programme>)
        .transpose()?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if args.csv {
        let selected = select_programme(&matrix, programme)?;
        selected
            .write_csv(&mut out)
            .map_err(|err| AppError::Io(err.into()))?;
    } else {
        write_listing(&mut out, &matrix, programme)?;
    }
    Ok(())
}

fn select_programme(
    matrix: &SeatMatrix,
    programme: Option<Programme>,
) -> Result<SeatMatrix, AppError> {
    let Some(programme) = programme else {
        return Ok(matrix.clone());
    };

    let tables = matrix
        .tables()
        .filter(|table| table.programme() == programme)
        .cloned()
        .collect::<Vec<_>>();
    SeatMatrix::new(matrix.cycle(), tables).map_err(|_| not_offered(matrix, programme))
}

fn write_listing<W: Write>(
    out: &mut W,
    matrix: &SeatMatrix,
    programme: Option<Programme>,
) -> Result<(), AppError> {
    if let Some(programme) = programme {
        if matrix.table(programme).is_none() {
            return Err(not_offered(matrix, programme));
        }
    }

    writeln!(out, "Seat matrix: {}", matrix.cycle())?;
    for table in matrix.tables() {
        if programme.is_some_and(|wanted| wanted != table.programme()) {
            continue;
        }
        writeln!(
            out,
            "\n{} ({})",
            table.programme().label(),
            table.programme().code()
        )?;
        for (category, cutoff) in table.entries() {
            writeln!(out, "- {}: last admitted rank {}", category, cutoff)?;
        }
    }
    Ok(())
}

fn not_offered(matrix: &SeatMatrix, programme: Programme) -> AppError {
    AppError::from(EligibilityError::InvalidInput {
        field: InputField::Programme,
        reason: format!("{programme} is not offered in {}", matrix.cycle()),
    })
}
