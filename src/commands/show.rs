use crate::{
    db::shifts::Shifts,
    libs::{
        analyzer::ShiftAnalysis,
        classifier::{classify, SlotView},
        messages::Message,
        shift::EmployeeId,
        store::ShiftStore,
        time::{format_clock_time, format_duration},
    },
    msg_info, msg_print, msg_warning,
};
use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Args;

#[derive(Debug, Args)]
pub struct ShowArgs {
    #[arg(help = "Employee identifier")]
    employee: String,
    #[arg(long, short, default_value = "today", help = "Date to show (YYYY-MM-DD or 'today')")]
    date: String,
}

pub fn cmd(args: ShowArgs) -> Result<()> {
    let date = parse_date(&args.date)?;
    let employee = EmployeeId::new(args.employee);
    let date_label = date.format("%B %-d, %Y").to_string();

    let Some(record) = Shifts::new()?.load(&employee, date)? else {
        msg_info!(Message::NoShiftFound(employee.to_string(), date_label));
        return Ok(());
    };

    let analysis = ShiftAnalysis::of(&record);
    msg_print!(Message::ShiftHeader(employee.to_string(), date_label), true);
    msg_print!(row("Morning", &analysis.view.display_first, analysis.first_minutes));
    msg_print!(row("Afternoon", &analysis.view.display_second, analysis.second_minutes));
    msg_print!(Message::WorkedTotal(format_duration(analysis.total_minutes)), true);

    if classify(&record).is_err() {
        msg_warning!(Message::ShiftAmbiguous);
    }
    if analysis.incomplete {
        msg_warning!(Message::ShiftIncomplete);
    }

    Ok(())
}

fn row(label: &str, view: &SlotView, minutes: i64) -> String {
    format!(
        "{:<10} {:>5} - {:<5} {:>6}",
        label,
        format_clock_time(view.start),
        format_clock_time(view.end),
        format_duration(minutes)
    )
}

fn parse_date(date_str: &str) -> Result<NaiveDate> {
    if date_str.eq_ignore_ascii_case("today") {
        Ok(Local::now().date_naive())
    } else {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").with_context(|| Message::InvalidDate(date_str.to_string()).to_string())
    }
}
