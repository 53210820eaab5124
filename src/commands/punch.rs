use crate::{
    db::shifts::Shifts,
    libs::{
        clock::SystemClock,
        config::Config,
        messages::Message,
        punch::PunchClock,
        session::PunchAction,
        shift::{EmployeeId, SlotId},
        time::format_clock_time,
    },
    msg_bail_anyhow, msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct PunchArgs {
    #[arg(help = "Employee identifier")]
    employee: String,
    #[arg(value_enum, help = "Raw slot to punch")]
    slot: SlotId,
    #[arg(value_enum, default_value_t = PunchAction::Start, help = "Clock in (start) or out (end)")]
    action: PunchAction,
}

pub fn cmd(args: PunchArgs) -> Result<()> {
    let config = Config::read()?;
    let clock = PunchClock::new(Shifts::new()?, SystemClock, config.punch.unwrap_or_default());
    let employee = EmployeeId::new(args.employee);

    let record = match clock.punch(&employee, args.slot, args.action) {
        Ok(record) => record,
        Err(e) => msg_bail_anyhow!(Message::PunchRejected(e.to_string())),
    };

    let slot = record.slot(args.slot);
    let stamp = match args.action {
        PunchAction::Start => slot.start,
        PunchAction::End => slot.end,
    };
    msg_success!(Message::PunchRecorded {
        employee: employee.to_string(),
        slot: args.slot.to_string(),
        action: args.action.to_string(),
        time: format_clock_time(stamp),
    });
    if let Some(state) = clock.session_state(&employee)? {
        msg_info!(Message::SessionState(state.to_string()));
    }

    Ok(())
}
