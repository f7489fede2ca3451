//! DCD trajectory writer.
//!
//! Produces the little-endian CHARMM layout written by OpenMM's `DCDReporter`: a fixed
//! 276-byte header followed by one record per frame. Positions are taken in nanometers and
//! stored in Angstroms as 32-bit floats. The frame count and last-step fields of the header
//! are rewritten after every frame so a partially written trajectory stays readable.

use nalgebra::{Point3, Vector3};
use std::io::{self, Seek, SeekFrom, Write};
use thiserror::Error;

pub const ANGSTROMS_PER_NM: f64 = 10.0;
/// One AKMA time unit expressed in picoseconds.
pub const PS_PER_AKMA: f64 = 0.04888821;

const HEADER_BLOCK_SIZE: i32 = 84;
const TITLE_BLOCK_SIZE: i32 = 164;
const TITLE_LINE_LEN: usize = 80;
const UNIT_CELL_BLOCK_SIZE: i32 = 48;
const CHARMM_VERSION: i32 = 24;
const FRAME_COUNT_OFFSET: u64 = 8;
const LAST_STEP_OFFSET: u64 = 20;

#[derive(Debug, Error)]
pub enum DcdError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Frame has {found} atoms but the trajectory was created for {expected}")]
    AtomCountMismatch { expected: usize, found: usize },
    #[error("Frame unit cell presence does not match the trajectory header")]
    UnitCellMismatch,
    #[error("Value {value} for '{field}' does not fit in a DCD header field")]
    ValueOutOfRange { field: &'static str, value: u64 },
}

/// Periodic cell parameters in Angstroms and degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitCell {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
}

impl UnitCell {
    /// Builds cell parameters from three periodic box vectors given in nanometers.
    pub fn from_box_vectors(vectors: &[Vector3<f64>; 3]) -> Self {
        let [a, b, c] = vectors;
        Self {
            a: a.norm() * ANGSTROMS_PER_NM,
            b: b.norm() * ANGSTROMS_PER_NM,
            c: c.norm() * ANGSTROMS_PER_NM,
            alpha: b.angle(c).to_degrees(),
            beta: a.angle(c).to_degrees(),
            gamma: a.angle(b).to_degrees(),
        }
    }
}

/// Header parameters fixed for the lifetime of a trajectory.
#[derive(Debug, Clone)]
pub struct DcdHeaderSpec {
    pub num_atoms: usize,
    pub first_step: u64,
    pub interval: u64,
    pub timestep_ps: f64,
    pub has_unit_cell: bool,
    pub title: String,
}

/// Streaming DCD writer over any seekable sink.
pub struct DcdWriter<W: Write + Seek> {
    inner: W,
    spec: DcdHeaderSpec,
    frames_written: u32,
}

impl<W: Write + Seek> DcdWriter<W> {
    /// Writes the header and returns a writer positioned for the first frame.
    ///
    /// # Errors
    ///
    /// Returns [`DcdError::ValueOutOfRange`] if a header field exceeds the 32-bit layout,
    /// or [`DcdError::Io`] if the sink rejects the write.
    pub fn new(mut inner: W, spec: DcdHeaderSpec) -> Result<Self, DcdError> {
        let first_step = to_i32("first_step", spec.first_step)?;
        let interval = to_i32("interval", spec.interval)?;
        let num_atoms = to_i32("num_atoms", spec.num_atoms as u64)?;

        let mut header = Vec::with_capacity(276);
        push_i32(&mut header, HEADER_BLOCK_SIZE);
        header.extend_from_slice(b"CORD");
        push_i32(&mut header, 0); // frame count
        push_i32(&mut header, first_step);
        push_i32(&mut header, interval);
        push_i32(&mut header, 0); // last step
        for _ in 0..5 {
            push_i32(&mut header, 0);
        }
        header.extend_from_slice(&((spec.timestep_ps / PS_PER_AKMA) as f32).to_le_bytes());
        push_i32(&mut header, i32::from(spec.has_unit_cell));
        for _ in 0..8 {
            push_i32(&mut header, 0);
        }
        push_i32(&mut header, CHARMM_VERSION);
        push_i32(&mut header, HEADER_BLOCK_SIZE);

        push_i32(&mut header, TITLE_BLOCK_SIZE);
        push_i32(&mut header, 2);
        push_title(&mut header, "Created by mdpreview");
        push_title(&mut header, &spec.title);
        push_i32(&mut header, TITLE_BLOCK_SIZE);

        push_i32(&mut header, 4);
        push_i32(&mut header, num_atoms);
        push_i32(&mut header, 4);

        inner.write_all(&header)?;

        Ok(Self {
            inner,
            spec,
            frames_written: 0,
        })
    }

    /// Appends one frame and updates the header bookkeeping.
    ///
    /// # Errors
    ///
    /// Fails if the atom count or unit cell presence differs from the header, or on I/O errors.
    pub fn write_frame(
        &mut self,
        positions_nm: &[Point3<f64>],
        unit_cell: Option<&UnitCell>,
    ) -> Result<(), DcdError> {
        if positions_nm.len() != self.spec.num_atoms {
            return Err(DcdError::AtomCountMismatch {
                expected: self.spec.num_atoms,
                found: positions_nm.len(),
            });
        }
        if unit_cell.is_some() != self.spec.has_unit_cell {
            return Err(DcdError::UnitCellMismatch);
        }

        let n = positions_nm.len();
        let mut frame = Vec::with_capacity(3 * (4 * n + 8) + 56);

        if let Some(cell) = unit_cell {
            push_i32(&mut frame, UNIT_CELL_BLOCK_SIZE);
            for value in [cell.a, cell.gamma, cell.b, cell.beta, cell.alpha, cell.c] {
                frame.extend_from_slice(&value.to_le_bytes());
            }
            push_i32(&mut frame, UNIT_CELL_BLOCK_SIZE);
        }

        let block_size = to_i32("coordinate block", 4 * n as u64)?;
        for axis in 0..3 {
            push_i32(&mut frame, block_size);
            for position in positions_nm {
                let value = (position[axis] * ANGSTROMS_PER_NM) as f32;
                frame.extend_from_slice(&value.to_le_bytes());
            }
            push_i32(&mut frame, block_size);
        }

        let frame_count = to_i32("frame_count", u64::from(self.frames_written) + 1)?;
        let last_step = self.spec.first_step
            + u64::from(self.frames_written) * self.spec.interval;
        let last_step = to_i32("last_step", last_step)?;

        self.inner.seek(SeekFrom::End(0))?;
        self.inner.write_all(&frame)?;
        self.frames_written += 1;

        self.inner.seek(SeekFrom::Start(FRAME_COUNT_OFFSET))?;
        self.inner.write_all(&frame_count.to_le_bytes())?;
        self.inner.seek(SeekFrom::Start(LAST_STEP_OFFSET))?;
        self.inner.write_all(&last_step.to_le_bytes())?;
        self.inner.seek(SeekFrom::End(0))?;
        Ok(())
    }

    pub fn frames_written(&self) -> u32 {
        self.frames_written
    }

    pub fn flush(&mut self) -> Result<(), DcdError> {
        self.inner.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

fn to_i32(field: &'static str, value: u64) -> Result<i32, DcdError> {
    i32::try_from(value).map_err(|_| DcdError::ValueOutOfRange { field, value })
}

fn push_i32(buffer: &mut Vec<u8>, value: i32) {
    buffer.extend_from_slice(&value.to_le_bytes());
}

fn push_title(buffer: &mut Vec<u8>, title: &str) {
    let mut line = [b' '; TITLE_LINE_LEN];
    let bytes = title.as_bytes();
    let len = bytes.len().min(TITLE_LINE_LEN);
    line[..len].copy_from_slice(&bytes[..len]);
    buffer.extend_from_slice(&line);
}
