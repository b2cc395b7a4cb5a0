use clap::{Arg, ArgAction, Command};
use ld06_data::LidarModel;
use ld06_driver::{run_driver, NoMotor};
use std::io::Write;

struct Args {
    port_name: String,
    model: LidarModel,
    json: bool,
}

fn get_args() -> Args {
    let matches = Command::new("LD06 sample printer.")
        .about("Reads data from LiDAR and prints one sample per line.")
        .disable_version_flag(true)
        .arg(
            Arg::new("port")
                .help("The device path to a serial port")
                .use_value_delimiter(false)
                .required(true),
        )
        .arg(
            Arg::new("model")
                .long("model")
                .help("Sensor model")
                .value_parser(["LD06", "LD19"])
                .default_value("LD06"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print JSON lines instead of angle,distance,confidence")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let port_name: &String = matches.get_one("port").unwrap();
    let model = match matches.get_one::<String>("model").map(String::as_str) {
        Some("LD19") => LidarModel::LD19,
        _ => LidarModel::LD06,
    };
    Args {
        port_name: port_name.to_string(),
        model,
        json: matches.get_flag("json"),
    }
}

fn main() {
    env_logger::init();
    let args = get_args();

    let (driver_threads, sample_rx) = match run_driver(&args.port_name, args.model, &mut NoMotor)
    {
        Ok(driver) => driver,
        Err(e) => {
            log::error!("Failed to open \"{}\". Error: {}", args.port_name, e);
            std::process::exit(1);
        }
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    while let Ok(sample) = sample_rx.recv() {
        let res = if args.json {
            serde_json::to_string(&sample)
                .map_err(std::io::Error::from)
                .and_then(|line| writeln!(out, "{}", line))
        } else {
            writeln!(out, "{}", sample)
        };
        if res.is_err() {
            break;
        }
    }

    drop(driver_threads);
}
