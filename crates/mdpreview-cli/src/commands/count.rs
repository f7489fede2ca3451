use crate::cli::CountArgs;
use crate::error::{CliError, Result};
use mdpreview::core::io::{smi::SmiFile, traits::TopologyFile};
use mdpreview::workflows::count::{self, MoleculeCounts};
use std::io::{self, Write};
use std::path::Path;
use tracing::info;

pub fn run(args: CountArgs) -> Result<()> {
    let stdout = io::stdout();
    let counts = summarize(&args.topology, &mut stdout.lock())?;
    info!("Summarized {} distinct molecule(s).", counts.len());
    Ok(())
}

fn summarize(topology_path: &Path, out: &mut impl Write) -> Result<MoleculeCounts> {
    info!("Loading topology from {:?}", topology_path);
    let topology = SmiFile::read_from_path(topology_path).map_err(|e| CliError::FileParsing {
        path: topology_path.to_path_buf(),
        source: e.into(),
    })?;
    info!("Topology contains {} molecule(s).", topology.len());

    let counts = count::count_molecules(&topology)?;
    counts.write_summary(out)?;
    out.flush()?;
    Ok(counts)
}
