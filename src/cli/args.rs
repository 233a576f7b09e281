//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum, ValueHint};

use crate::domain::{
    CopyDirection, GlobalOption, LatticeOption, LatticePlotType, OptionSet, OutputFormat,
    ShiftDirection, StreamOption, StreamPlotType,
};

/// Typed front end for camelot: PDF table extraction for humans
#[derive(Parser, Debug)]
#[command(name = "rscamelot")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub debug: u8,

    /// Config file, layered over the global config
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// camelot executable (overrides config)
    #[arg(long, global = true, value_hint = ValueHint::CommandName)]
    pub program: Option<String>,

    /// Print the camelot command line instead of running it
    #[arg(long, global = true)]
    pub dry_run: bool,

    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// camelot's global options, passed before the sub-operation.
#[derive(Args, Debug, Default)]
pub struct GlobalArgs {
    /// Suppress logs and warnings
    #[arg(short, long, value_name = "LEVEL")]
    pub quiet: Option<String>,

    /// Comma-separated page numbers, e.g. 1,3,4 or 1,4-end or all
    #[arg(short, long)]
    pub pages: Option<String>,

    /// Password for decryption
    #[arg(long)]
    pub password: Option<String>,

    /// Output file path
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub output: Option<String>,

    /// Output file format: csv, excel, html, json, markdown, sqlite
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Create ZIP archive
    #[arg(short, long)]
    pub zip: bool,

    /// Split text that spans across multiple cells
    #[arg(long)]
    pub split_text: bool,

    /// Flag text based on font size (super/subscripts)
    #[arg(long)]
    pub flag_size: bool,

    /// Characters stripped from a string before assigning it to a cell
    #[arg(long)]
    pub strip_text: Option<String>,

    /// PDFMiner char_margin, line_margin and word_margin
    #[arg(short = 'M', long, num_args = 3, value_names = ["CHAR", "LINE", "WORD"])]
    pub margins: Option<Vec<f64>>,
}

impl GlobalArgs {
    /// Options in camelot's documented order.
    pub fn options(&self) -> OptionSet<GlobalOption> {
        let mut options = OptionSet::new();
        if let Some(quiet) = &self.quiet {
            options.push(GlobalOption::Quiet(quiet.clone()));
        }
        if let Some(pages) = &self.pages {
            options.push(GlobalOption::Pages(pages.clone()));
        }
        if let Some(password) = &self.password {
            options.push(GlobalOption::Password(password.clone()));
        }
        if let Some(output) = &self.output {
            options.push(GlobalOption::Output(output.clone()));
        }
        if let Some(format) = self.format {
            options.push(GlobalOption::Format(format));
        }
        if self.zip {
            options.push(GlobalOption::Zip);
        }
        if self.split_text {
            options.push(GlobalOption::SplitText);
        }
        if self.flag_size {
            options.push(GlobalOption::FlagSize);
        }
        if let Some(strip) = &self.strip_text {
            options.push(GlobalOption::StripText(strip.clone()));
        }
        if let Some(&[char_margin, line_margin, word_margin]) = self.margins.as_deref() {
            options.push(GlobalOption::Margins([char_margin, line_margin, word_margin]));
        }
        options
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Use lines between text to parse the table
    Lattice(LatticeArgs),

    /// Use spaces between text to parse the table
    Stream(StreamArgs),

    /// Show camelot's own help text
    Usage {
        /// Sub-operation to show help for (top-level help if omitted)
        #[arg(value_enum)]
        topic: Option<UsageTopic>,
    },

    /// Show camelot's version
    Version,

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageTopic {
    Lattice,
    Stream,
}

#[derive(Args, Debug)]
pub struct LatticeArgs {
    /// PDF file to extract tables from
    #[arg(value_hint = ValueHint::FilePath)]
    pub file: PathBuf,

    /// Page regions to analyze: x1,y1,x2,y2 (repeatable)
    #[arg(short = 'R', long)]
    pub table_regions: Vec<String>,

    /// Table areas to process: x1,y1,x2,y2 (repeatable)
    #[arg(short = 'T', long)]
    pub table_areas: Vec<String>,

    /// Process background lines
    #[arg(long)]
    pub process_background: bool,

    /// Line size scaling factor
    #[arg(long)]
    pub line_scale: Option<i64>,

    /// Direction in which text in a spanning cell is copied: h, v
    #[arg(long)]
    pub copy_text: Option<CopyDirection>,

    /// Directions in which text in a spanning cell flows, comma-separated: l,r,t,b
    #[arg(long, value_delimiter = ',')]
    pub shift_text: Option<Vec<ShiftDirection>>,

    /// Tolerance used to merge close vertical and horizontal lines
    #[arg(long)]
    pub line_tol: Option<i64>,

    /// Tolerance used to decide whether lines and points lie close together
    #[arg(long)]
    pub joint_tol: Option<i64>,

    /// Pixel neighborhood size for adaptive thresholding
    #[arg(long)]
    pub threshold_blocksize: Option<i64>,

    /// Constant subtracted from the mean for adaptive thresholding
    #[arg(long, allow_negative_numbers = true)]
    pub threshold_constant: Option<i64>,

    /// Number of erosion/dilation passes
    #[arg(long)]
    pub iterations: Option<i64>,

    /// Resolution used for PDF to PNG conversion
    #[arg(long)]
    pub resolution: Option<i64>,

    /// Plot elements for visual debugging: text, grid, contour, joint, line
    #[arg(long)]
    pub plot_type: Option<LatticePlotType>,
}

impl LatticeArgs {
    pub fn options(&self) -> OptionSet<LatticeOption> {
        let mut options: OptionSet<LatticeOption> = self
            .table_regions
            .iter()
            .cloned()
            .map(LatticeOption::TableRegions)
            .collect();
        options.extend(self.table_areas.iter().cloned().map(LatticeOption::TableAreas));

        if self.process_background {
            options.push(LatticeOption::ProcessBackground);
        }
        if let Some(scale) = self.line_scale {
            options.push(LatticeOption::LineScale(scale));
        }
        if let Some(direction) = self.copy_text {
            options.push(LatticeOption::CopyText(direction));
        }
        if let Some(directions) = &self.shift_text {
            options.push(LatticeOption::ShiftText(directions.clone()));
        }
        if let Some(tol) = self.line_tol {
            options.push(LatticeOption::LineTolerance(tol));
        }
        if let Some(tol) = self.joint_tol {
            options.push(LatticeOption::JointTolerance(tol));
        }
        if let Some(size) = self.threshold_blocksize {
            options.push(LatticeOption::ThresholdBlocksize(size));
        }
        if let Some(constant) = self.threshold_constant {
            options.push(LatticeOption::ThresholdConstant(constant));
        }
        if let Some(iterations) = self.iterations {
            options.push(LatticeOption::Iterations(iterations));
        }
        if let Some(resolution) = self.resolution {
            options.push(LatticeOption::Resolution(resolution));
        }
        if let Some(plot) = self.plot_type {
            options.push(LatticeOption::PlotType(plot));
        }
        options
    }
}

#[derive(Args, Debug)]
pub struct StreamArgs {
    /// PDF file to extract tables from
    #[arg(value_hint = ValueHint::FilePath)]
    pub file: PathBuf,

    /// Page regions to analyze: x1,y1,x2,y2 (repeatable)
    #[arg(short = 'R', long)]
    pub table_regions: Vec<String>,

    /// Table areas to process: x1,y1,x2,y2 (repeatable)
    #[arg(short = 'T', long)]
    pub table_areas: Vec<String>,

    /// X coordinates of column separators (repeatable)
    #[arg(short = 'C', long)]
    pub columns: Vec<String>,

    /// Tolerance for extending text edges vertically
    #[arg(long)]
    pub edge_tol: Option<i64>,

    /// Tolerance used to combine text vertically into rows
    #[arg(long)]
    pub row_tol: Option<i64>,

    /// Tolerance used to combine text horizontally into columns
    #[arg(long)]
    pub column_tol: Option<i64>,

    /// Plot elements for visual debugging: text, grid, contour, textedge
    #[arg(long)]
    pub plot_type: Option<StreamPlotType>,
}

impl StreamArgs {
    pub fn options(&self) -> OptionSet<StreamOption> {
        let mut options: OptionSet<StreamOption> = self
            .table_regions
            .iter()
            .cloned()
            .map(StreamOption::TableRegions)
            .collect();
        options.extend(self.table_areas.iter().cloned().map(StreamOption::TableAreas));
        options.extend(self.columns.iter().cloned().map(StreamOption::Columns));

        if let Some(tol) = self.edge_tol {
            options.push(StreamOption::EdgeTolerance(tol));
        }
        if let Some(tol) = self.row_tol {
            options.push(StreamOption::RowTolerance(tol));
        }
        if let Some(tol) = self.column_tol {
            options.push(StreamOption::ColumnTolerance(tol));
        }
        if let Some(plot) = self.plot_type {
            options.push(StreamOption::PlotType(plot));
        }
        options
    }
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,
    /// Show config paths
    Path,
}
