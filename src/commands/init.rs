use crate::{
    libs::{
        config::{Config, CONFIG_FILE_NAME},
        data_storage::DataStorage,
        messages::Message,
    },
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    #[arg(long, help = "Reject a start that would put both slots of a day in the morning")]
    reject_ambiguous: bool,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    let mut config = Config::init()?;
    if init_args.reject_ambiguous {
        config.punch.get_or_insert_with(Default::default).reject_ambiguous = true;
        config.save()?;
    }

    let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
    msg_success!(Message::ConfigSaved(path.display().to_string()));
    Ok(())
}
