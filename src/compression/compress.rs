use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};

use log::{info, warn};

use crate::error::Result;
use crate::huffman_coding::coding_tree::CodingTree;
use crate::tools::cli::HuffOpts;
use crate::tools::report::{Report, Timer};

/// Open an output file, refusing to replace an existing one unless `force` is set.
pub(crate) fn open_output(path: &str, force: bool) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.write(true);
    if force {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }
    options.open(path).map_err(|e| {
        if e.kind() == io::ErrorKind::AlreadyExists {
            warn!("{} already exists. Use -f to overwrite it.", path);
        }
        e
    })
}

/// Compress the input file defined in opts. Writes the code table text and the packed bytes,
/// then prints the report.
pub fn compress(opts: &HuffOpts) -> Result<Report> {
    let mut timer = Timer::new();

    let text = fs::read_to_string(&opts.file)?;
    timer.mark("read");
    if text.is_empty() {
        warn!("{} is empty.", opts.file);
    }

    let coding_tree = CodingTree::new(&text)?;
    timer.mark("encode");
    info!(
        "{} distinct symbols, {} bits of code.",
        coding_tree.codes.len(),
        coding_tree.bit_len
    );

    // Both outputs are opened before either is written, and a code table we just created is
    // removed again if the packed file can't be opened.
    let codes_path = opts.codes_path();
    let out_path = opts.output_path();
    let mut codes_out = open_output(&codes_path, opts.force_overwrite)?;
    let mut bits_out = match open_output(&out_path, opts.force_overwrite) {
        Ok(f) => f,
        Err(e) => {
            drop(codes_out);
            if let Err(rm) = fs::remove_file(&codes_path) {
                warn!("Could not remove {}: {}", codes_path, rm);
            }
            return Err(e.into());
        }
    };

    // The code table goes out as one line of text, the bits as raw bytes.
    writeln!(codes_out, "{}", coding_tree.codes)?;
    bits_out.write_all(&coding_tree.bits)?;
    timer.mark("write");
    info!("Wrote {} and {}.", codes_path, out_path);

    let report = Report {
        elapsed: timer.elapsed(),
        original: text.len() as u64,
        compressed: coding_tree.bits.len() as u64,
    };
    println!("{}", report);
    Ok(report)
}
