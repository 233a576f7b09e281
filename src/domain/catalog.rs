//! Flag vocabularies of the camelot CLI.
//!
//! ```text
//! camelot [OPTIONS] COMMAND [ARGS]...
//! camelot lattice [OPTIONS] FILEPATH
//! camelot stream [OPTIONS] FILEPATH
//! ```

use crate::domain::choice::{
    CopyDirection, LatticePlotType, OutputFormat, ShiftDirection, StreamPlotType,
};
use crate::domain::option::{CommandOption, FlagValue, Subcommand, SubcommandOption};

/// Options placed before the sub-operation name.
#[derive(Debug, Clone, PartialEq)]
pub enum GlobalOption {
    /// Show the version and exit.
    Version,
    /// Suppress logs and warnings.
    Quiet(String),
    /// Comma-separated page numbers, e.g. `1,3,4` or `1,4-end` or `all`.
    Pages(String),
    /// Password for decryption.
    Password(String),
    /// Output file path.
    Output(String),
    Format(OutputFormat),
    /// Create ZIP archive.
    Zip,
    /// Split text that spans across multiple cells.
    SplitText,
    /// Flag text based on font size, to detect super/subscripts.
    FlagSize,
    /// Characters stripped from a string before assigning it to a cell.
    StripText(String),
    /// PDFMiner `char_margin`, `line_margin` and `word_margin`.
    Margins([f64; 3]),
    Help,
}

impl CommandOption for GlobalOption {
    fn parts(&self) -> (&'static str, &dyn FlagValue) {
        match self {
            GlobalOption::Version => ("--version", &()),
            GlobalOption::Quiet(level) => ("--quiet", level),
            GlobalOption::Pages(pages) => ("--pages", pages),
            GlobalOption::Password(password) => ("--password", password),
            GlobalOption::Output(path) => ("--output", path),
            GlobalOption::Format(format) => ("--format", format),
            GlobalOption::Zip => ("--zip", &()),
            GlobalOption::SplitText => ("--split_text", &()),
            GlobalOption::FlagSize => ("--flag_size", &()),
            GlobalOption::StripText(chars) => ("--strip_text", chars),
            GlobalOption::Margins(margins) => ("--margins", margins),
            GlobalOption::Help => ("--help", &()),
        }
    }
}

/// Options of the line-based `lattice` sub-operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LatticeOption {
    /// Page regions to analyze, `x1,y1,x2,y2` (left-top, right-bottom).
    TableRegions(String),
    /// Table areas to process, `x1,y1,x2,y2` (left-top, right-bottom).
    TableAreas(String),
    /// Process background lines.
    ProcessBackground,
    /// Line size scaling factor. Larger values detect smaller lines.
    LineScale(i64),
    CopyText(CopyDirection),
    ShiftText(Vec<ShiftDirection>),
    /// Tolerance used to merge close vertical and horizontal lines.
    LineTolerance(i64),
    /// Tolerance used to decide whether lines and points lie close together.
    JointTolerance(i64),
    /// Pixel neighborhood size for adaptive thresholding (3, 5, 7, ...).
    ThresholdBlocksize(i64),
    /// Constant subtracted from the mean for adaptive thresholding.
    ThresholdConstant(i64),
    /// Number of erosion/dilation passes.
    Iterations(i64),
    /// Resolution used for PDF to PNG conversion.
    Resolution(i64),
    PlotType(LatticePlotType),
    Help,
}

impl CommandOption for LatticeOption {
    fn parts(&self) -> (&'static str, &dyn FlagValue) {
        match self {
            LatticeOption::TableRegions(regions) => ("--table_regions", regions),
            LatticeOption::TableAreas(areas) => ("--table_areas", areas),
            LatticeOption::ProcessBackground => ("--process_background", &()),
            LatticeOption::LineScale(scale) => ("--line_scale", scale),
            LatticeOption::CopyText(direction) => ("--copy_text", direction),
            LatticeOption::ShiftText(directions) => ("--shift_text", directions),
            LatticeOption::LineTolerance(tol) => ("--line_tol", tol),
            LatticeOption::JointTolerance(tol) => ("--joint_tol", tol),
            LatticeOption::ThresholdBlocksize(size) => ("--threshold_blocksize", size),
            LatticeOption::ThresholdConstant(constant) => ("--threshold_constant", constant),
            LatticeOption::Iterations(iterations) => ("--iterations", iterations),
            LatticeOption::Resolution(resolution) => ("--resolution", resolution),
            LatticeOption::PlotType(plot) => ("--plot_type", plot),
            LatticeOption::Help => ("--help", &()),
        }
    }
}

impl SubcommandOption for LatticeOption {
    const SUBCOMMAND: Subcommand = Subcommand::Lattice;
}

/// Options of the whitespace-based `stream` sub-operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamOption {
    TableRegions(String),
    TableAreas(String),
    /// X coordinates of column separators.
    Columns(String),
    /// Tolerance for extending text edges vertically.
    EdgeTolerance(i64),
    /// Tolerance used to combine text vertically into rows.
    RowTolerance(i64),
    /// Tolerance used to combine text horizontally into columns.
    ColumnTolerance(i64),
    PlotType(StreamPlotType),
    Help,
}

impl CommandOption for StreamOption {
    fn parts(&self) -> (&'static str, &dyn FlagValue) {
        match self {
            StreamOption::TableRegions(regions) => ("--table_regions", regions),
            StreamOption::TableAreas(areas) => ("--table_areas", areas),
            StreamOption::Columns(columns) => ("--columns", columns),
            StreamOption::EdgeTolerance(tol) => ("--edge_tol", tol),
            StreamOption::RowTolerance(tol) => ("--row_tol", tol),
            StreamOption::ColumnTolerance(tol) => ("--column_tol", tol),
            StreamOption::PlotType(plot) => ("--plot_type", plot),
            StreamOption::Help => ("--help", &()),
        }
    }
}

impl SubcommandOption for StreamOption {
    const SUBCOMMAND: Subcommand = Subcommand::Stream;
}
