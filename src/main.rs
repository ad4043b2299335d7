use clap::Parser;
use paraxial::{
    console::{Args, PartialArgs},
    error::ParaxResult,
    prescription::Prescription,
};

fn main() -> ParaxResult<()> {
    env_logger::init();
    //parse CLI arguments
    let args = Args::try_from(PartialArgs::parse())?;

    //read prescription from file and run the analyzers
    let prescription = Prescription::from_file(&args.file_path)?;
    let report = prescription.analyze(&args.analyzers)?;

    print!("{}", report.to_yaml_string()?);
    Ok(())
}
