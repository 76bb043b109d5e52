use crate::commandline::Commandline;
use crate::error::VidshareError;
use clap::Parser;

mod commandline;
mod comment;
mod configuration;
mod context;
mod error;
mod server;
mod video;

#[tokio::main]
async fn main() -> Result<(), VidshareError> {
	let commandline = Commandline::try_parse()?;
	commandline.run().await
}
