use std::io::{self, BufRead, Write};

use carousel::features::{GradeModel, StudentInputs, Verdict};
use carousel::{Catalog, Config, Control, Cursor, Page, Session};
use clap::{Parser, Subcommand};
use env_logger::Builder;
use log::{info, warn};

#[derive(Parser)]
struct Options {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Browse a page, reading prev/next/first/last/jump commands from stdin
    Browse {
        #[arg(value_name = "PAGE")]
        page: Page,
    },
    /// Predict a final exam score
    Predict {
        #[arg(long)]
        student_id: Option<String>,
        #[arg(long)]
        study_hours: f64,
        /// Attendance in whole percent
        #[arg(long)]
        attendance: u8,
        #[arg(long)]
        midterm: f64,
        /// Homework completion in whole percent
        #[arg(long)]
        homework: u8,
        #[arg(long)]
        gender: String,
        #[arg(long)]
        major: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error + 'static>> {
    let mut builder = Builder::from_default_env();
    builder.init();

    let opts = Options::parse();
    let config = Config::load()?;

    match opts.command {
        Command::Browse { page } => browse(&config, page),
        Command::Predict {
            student_id,
            study_hours,
            attendance,
            midterm,
            homework,
            gender,
            major,
        } => {
            let inputs = StudentInputs {
                student_id,
                study_hours,
                attendance_percent: attendance,
                midterm_score: midterm,
                homework_percent: homework,
                gender,
                major,
            };
            predict(&config, &inputs)
        }
    }
}

fn browse(config: &Config, page: Page) -> Result<(), Box<dyn std::error::Error + 'static>> {
    let catalog = Catalog::from_file(&config.catalog_path)?;
    let mut session = Session::new(&catalog);
    session.navigator(page)?;
    info!("browsing {}", page);

    let mut out = io::stdout().lock();
    show(&session, page, &mut out)?;
    for line in io::stdin().lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "quit" || line == "q" {
            break;
        }
        let applied = line
            .parse::<Control>()
            .map_err(|e| e.to_string())
            .and_then(|control| session.apply(page, control).map_err(|e| e.to_string()));
        if let Err(message) = applied {
            writeln!(out, "{}", message)?;
        }
        show(&session, page, &mut out)?;
    }
    Ok(())
}

fn show(session: &Session, page: Page, out: &mut impl Write) -> Result<(), Box<dyn std::error::Error + 'static>> {
    match page {
        Page::Slides => {
            let cursor = session.slides()?;
            let slide = cursor.item();
            writeln!(
                out,
                "[{}/{}] {} ({})",
                cursor.current() + 1,
                cursor.len(),
                slide.caption,
                slide.path
            )?;
        }
        Page::Tracks => {
            let cursor = session.tracks()?;
            let track = cursor.item();
            writeln!(
                out,
                "[{}/{}] {} - {}\n  audio: {}\n  cover: {}",
                cursor.current() + 1,
                cursor.len(),
                track.title,
                track.singer,
                track.audio_url,
                track.cover_url
            )?;
        }
        Page::Episodes => {
            let cursor = session.episodes()?;
            let episode = cursor.item();
            writeln!(
                out,
                "[{}/{}] {}\n  video: {}\n  {}",
                cursor.current() + 1,
                cursor.len(),
                episode.title,
                episode.url,
                episode.intro
            )?;
            if !episode.cast.is_empty() {
                writeln!(out, "  cast: {}", episode.cast.join(", "))?;
            }
        }
    }
    Ok(())
}

fn predict(config: &Config, inputs: &StudentInputs) -> Result<(), Box<dyn std::error::Error + 'static>> {
    let model = GradeModel::load(&config.schema_path, &config.model_path, config.pass_mark)?;
    for (category, value) in [
        (carousel::features::inputs::GENDER, &inputs.gender),
        (carousel::features::inputs::MAJOR, &inputs.major),
    ] {
        let allowed = model.schema().unique_values(category);
        if !allowed.is_empty() && !allowed.contains(value) {
            warn!("{} {:?} is not one of {:?}", category, value, allowed);
        }
    }

    let prediction = model.predict(inputs)?;
    println!("predicted final score: {:.1}", prediction.score);
    match prediction.verdict {
        Verdict::Pass => println!("passing, keep it up"),
        Verdict::Fail => println!("below the pass mark of {}", config.pass_mark),
    }
    Ok(())
}
