//! SMALLF archive CLI utility
//!
//! A command-line tool for managing SMALLF (`SMALLF.DAT`) archive files.
//!
//! # Features
//!
//! - **info**: Display archive information and statistics
//! - **list**: List all entries with detailed information
//! - **extract**: Extract entries to a directory
//! - **pack**: Create an archive from a directory
//! - **verify**: Validate archive integrity and round-trip stability
//!
//! # File Format
//!
//! SMALLF archives are flat containers storing many small files back to
//! back after a table of contents, zero-padded to 2048-byte boundaries.
//! Two header layouts exist (V1 count-prefixed, V2 size-prefixed); both are
//! auto-detected when reading.
//!
//! # Usage Examples
//!
//! ```bash
//! # Display information about an archive
//! cargo run --example smf_utils -- info SMALLF.DAT
//!
//! # List all entries as JSON
//! cargo run --example smf_utils -- list SMALLF.DAT --format json
//!
//! # Extract everything
//! cargo run --example smf_utils -- extract SMALLF.DAT -o output/
//!
//! # Pack a directory into a fresh V1 archive
//! cargo run --example smf_utils -- pack input/ -o SMALLF.DAT
//!
//! # Verify integrity
//! cargo run --example smf_utils -- verify SMALLF.DAT
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use log::{error, info, warn};
use serde::Serialize;
use smallf_rs::{SmfError, SmfFile, Variant};
use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

#[derive(Parser)]
#[command(name = "smf_utils")]
#[command(author = "smallf-rs project")]
#[command(version = "1.0")]
#[command(about = "SMALLF archive utility - inspect, extract, pack, and verify", long_about = None)]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Display archive information and statistics
	Info {
		/// Archive file to inspect
		#[arg(value_name = "ARCHIVE")]
		archive: PathBuf,
	},

	/// List all entries in the archive
	List {
		/// Archive file to list
		#[arg(value_name = "ARCHIVE")]
		archive: PathBuf,

		/// Output format
		#[arg(short, long, value_enum, default_value = "table")]
		format: OutputFormat,

		/// Filter by name pattern (case-insensitive)
		#[arg(short = 'p', long, value_name = "PATTERN")]
		filter: Option<String>,
	},

	/// Extract entries from the archive
	Extract {
		/// Archive file to extract from
		#[arg(value_name = "ARCHIVE")]
		archive: PathBuf,

		/// Output directory
		#[arg(short, long, value_name = "DIR", default_value = ".")]
		output: PathBuf,
	},

	/// Pack a directory into an archive
	Pack {
		/// Input directory to pack
		#[arg(value_name = "DIR")]
		input: PathBuf,

		/// Output archive path
		#[arg(short, long, value_name = "ARCHIVE")]
		output: PathBuf,

		/// Container layout to write
		#[arg(short = 'l', long, value_enum, default_value = "v1")]
		layout: LayoutArg,
	},

	/// Validate archive integrity and round-trip stability
	Verify {
		/// Archive file to verify
		#[arg(value_name = "ARCHIVE")]
		archive: PathBuf,
	},
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
	Table,
	Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum LayoutArg {
	V1,
	V2,
}

impl From<LayoutArg> for Variant {
	fn from(value: LayoutArg) -> Self {
		match value {
			LayoutArg::V1 => Variant::V1,
			LayoutArg::V2 => Variant::V2,
		}
	}
}

#[derive(Serialize)]
struct EntryRecord {
	path: String,
	end_offset: u32,
	size: usize,
}

fn main() {
	env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

	let cli = Cli::parse();
	if let Err(err) = run(cli) {
		error!("{err}");
		std::process::exit(exit_code(&err));
	}
}

fn exit_code(err: &SmfError) -> i32 {
	match err {
		SmfError::NoEntries => 3,
		SmfError::IOError(io) if io.kind() == ErrorKind::NotFound => 2,
		SmfError::IOError(_) => 4,
		_ => 1,
	}
}

fn run(cli: Cli) -> Result<(), SmfError> {
	match cli.command {
		Commands::Info {
			archive,
		} => cmd_info(&archive),
		Commands::List {
			archive,
			format,
			filter,
		} => cmd_list(&archive, format, filter.as_deref()),
		Commands::Extract {
			archive,
			output,
		} => cmd_extract(&archive, &output),
		Commands::Pack {
			input,
			output,
			layout,
		} => cmd_pack(&input, &output, layout.into()),
		Commands::Verify {
			archive,
		} => cmd_verify(&archive),
	}
}

fn cmd_info(path: &Path) -> Result<(), SmfError> {
	let archive = SmfFile::open(path)?;
	let total_data: usize = archive.entries().iter().map(|e| e.len()).sum();

	println!("Archive:   {}", path.display());
	println!("Layout:    {}", archive.variant());
	println!("Entries:   {}", archive.num_entries());
	println!("TOC size:  {} bytes", archive.toc_size());
	println!("Data size: {} bytes", total_data);
	if archive.variant() == Variant::V1 {
		println!("Reserved:  {}", hex::encode(archive.reserved()));
	}
	Ok(())
}

fn cmd_list(path: &Path, format: OutputFormat, filter: Option<&str>) -> Result<(), SmfError> {
	let archive = SmfFile::open(path)?;

	let records: Vec<EntryRecord> = archive
		.entries()
		.iter()
		.filter(|e| {
			filter.is_none_or(|pattern| {
				e.name().to_lowercase().contains(&pattern.to_lowercase())
			})
		})
		.map(|e| EntryRecord {
			path: e.name(),
			end_offset: e.end_offset(),
			size: e.len(),
		})
		.collect();

	match format {
		OutputFormat::Table => {
			println!("{:<40} {:>12} {:>12}", "PATH", "END OFFSET", "SIZE");
			for record in &records {
				println!("{:<40} {:>12} {:>12}", record.path, record.end_offset, record.size);
			}
			println!("{} entries", records.len());
		}
		OutputFormat::Json => {
			let json = serde_json::to_string_pretty(&records)
				.map_err(|e| SmfError::IOError(std::io::Error::other(e)))?;
			println!("{json}");
		}
	}
	Ok(())
}

fn cmd_extract(path: &Path, output: &Path) -> Result<(), SmfError> {
	let archive = SmfFile::open(path)?;
	if archive.is_empty() {
		return Err(SmfError::NoEntries);
	}

	fs::create_dir_all(output)?;
	let mut written = 0usize;
	for entry in archive.entries() {
		let relative = PathBuf::from(entry.name().replace('\\', "/"));
		if !is_safe_relative(&relative) {
			warn!("skipping entry with unsafe path: '{}'", entry.name());
			continue;
		}

		let target = output.join(&relative);
		if let Some(parent) = target.parent() {
			fs::create_dir_all(parent)?;
		}
		fs::write(&target, entry.data())?;
		info!("extracted '{}' ({} bytes)", entry.name(), entry.len());
		written += 1;
	}

	info!("extracted {} entries from '{}'", written, path.display());
	Ok(())
}

fn cmd_pack(input: &Path, output: &Path, variant: Variant) -> Result<(), SmfError> {
	let mut pairs: Vec<(String, Vec<u8>)> = Vec::new();
	for result in walkdir::WalkDir::new(input) {
		let dir_entry = result.map_err(|e| {
			SmfError::IOError(e.into_io_error().unwrap_or_else(|| std::io::Error::other("walk failed")))
		})?;
		if !dir_entry.file_type().is_file() {
			continue;
		}

		let relative = dir_entry
			.path()
			.strip_prefix(input)
			.unwrap_or(dir_entry.path())
			.to_string_lossy()
			.into_owned();
		let data = fs::read(dir_entry.path())?;
		info!("adding '{}' ({:#X} bytes)", relative, data.len());
		pairs.push((relative, data));
	}

	if pairs.is_empty() {
		return Err(SmfError::NoEntries);
	}

	let archive = SmfFile::from_pairs(variant, pairs)?;
	archive.save_to_file(output)?;
	info!("written {} entries to '{}'", archive.num_entries(), output.display());
	Ok(())
}

fn cmd_verify(path: &Path) -> Result<(), SmfError> {
	let original = fs::read(path)?;
	let archive = SmfFile::from_bytes_auto(&original)?;

	if original.len() % smallf_rs::SMF_BLOCK_SIZE != 0 {
		warn!("archive is not aligned to {} bytes", smallf_rs::SMF_BLOCK_SIZE);
	}

	let reencoded = archive.to_bytes()?;
	if reencoded == original {
		info!(
			"OK: {} layout, {} entries, byte-identical round-trip",
			archive.variant(),
			archive.num_entries()
		);
	} else {
		warn!(
			"round-trip differs: {} original bytes vs {} re-encoded",
			original.len(),
			reencoded.len()
		);
	}
	Ok(())
}

/// Rejects paths that would escape the output directory
fn is_safe_relative(path: &Path) -> bool {
	path.components().all(|c| matches!(c, Component::Normal(_)))
}
