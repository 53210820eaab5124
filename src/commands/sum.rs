use crate::{
    db::shifts::Shifts,
    libs::{messages::Message, shift::EmployeeId, summary::ShiftSummary},
    msg_info, msg_print, msg_warning,
};
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Args;

#[derive(Debug, Args)]
pub struct SumArgs {
    #[arg(help = "Employee identifier")]
    employee: String,
    #[arg(long, short, help = "Month to summarize (YYYY-MM), defaults to the current month")]
    month: Option<String>,
}

pub fn cmd(args: SumArgs) -> Result<()> {
    let month = match &args.month {
        Some(month) => parse_month(month)?,
        None => Local::now().date_naive(),
    };
    let employee = EmployeeId::new(args.employee);

    msg_print!(
        Message::WorkingHoursForMonth(employee.to_string(), month.format("%B, %Y").to_string()),
        true
    );

    let records = Shifts::new()?.fetch_month(&employee, month)?;
    if records.is_empty() {
        msg_info!(Message::NoShiftsForMonth);
        return Ok(());
    }

    let summary = ShiftSummary::from_records(&records);
    for shift in &summary.rows {
        msg_print!(format!(
            "{}  {:>5} - {:<5}  {:>5} - {:<5}  {:>6}{}",
            shift.date,
            shift.morning_start,
            shift.morning_end,
            shift.afternoon_start,
            shift.afternoon_end,
            shift.worked,
            if shift.incomplete { "  *" } else { "" }
        ));
    }
    msg_print!(Message::WorkedTotal(summary.total()), true);

    if summary.incomplete_days > 0 {
        msg_warning!(Message::IncompleteDays(summary.incomplete_days));
    }

    Ok(())
}

fn parse_month(month: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", month), "%Y-%m-%d").with_context(|| Message::InvalidMonth(month.to_string()).to_string())
}
