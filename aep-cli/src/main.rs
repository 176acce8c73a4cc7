use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "aep", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a short summary of a project file.
    Info(InfoArgs),
    /// Dump the parsed project as JSON.
    Dump(DumpArgs),
    /// List render queue items with their resolved output paths.
    Queue(QueueArgs),
    /// Parse a project and report warnings; fail on a malformed file.
    Validate(ValidateArgs),
    /// Diff the chunk trees of two project files.
    Compare(CompareArgs),
    /// Print the chunk tree with offsets and sizes.
    Visualize(VisualizeArgs),
}

#[derive(Parser, Debug)]
struct InfoArgs {
    /// Input .aep project file.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct DumpArgs {
    /// Input .aep project file.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Pretty-print the JSON output.
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

#[derive(Parser, Debug)]
struct QueueArgs {
    /// Input .aep project file.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input .aep project file.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct CompareArgs {
    /// First project file.
    #[arg(long)]
    a: PathBuf,

    /// Second project file.
    #[arg(long)]
    b: PathBuf,
}

#[derive(Parser, Debug)]
struct VisualizeArgs {
    /// Input .aep project file.
    #[arg(long = "in")]
    in_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Info(args) => cmd_info(args),
        Command::Dump(args) => cmd_dump(args),
        Command::Queue(args) => cmd_queue(args),
        Command::Validate(args) => cmd_validate(args),
        Command::Compare(args) => cmd_compare(args),
        Command::Visualize(args) => cmd_visualize(args),
    }
}

fn load_chunk_tree(in_path: &Path) -> anyhow::Result<aep::Rifx> {
    let data = std::fs::read(in_path)
        .with_context(|| format!("read project '{}'", in_path.display()))?;
    let rifx = aep::Rifx::parse(&data)
        .with_context(|| format!("parse container '{}'", in_path.display()))?;
    Ok(rifx)
}

fn load_project(in_path: &Path) -> anyhow::Result<aep::Project> {
    let data = std::fs::read(in_path)
        .with_context(|| format!("read project '{}'", in_path.display()))?;
    let project = aep::parse_project(&data)
        .with_context(|| format!("parse project '{}'", in_path.display()))?;
    Ok(project)
}

fn cmd_info(args: InfoArgs) -> anyhow::Result<()> {
    let project = load_project(&args.in_path)?;

    if let Some(version) = &project.ae_version {
        println!("written by  {version}");
    }
    println!("color depth {} bpc", project.bits_per_channel.bits());
    if let Some(engine) = &project.expression_engine {
        println!("expressions {engine}");
    }

    let comps = project.compositions().count();
    let footage = project
        .items
        .iter()
        .filter(|item| matches!(item.data, aep::ItemData::Footage(_)))
        .count();
    let folders = project.items.iter().filter(|item| item.is_folder()).count();
    println!("items       {comps} comps, {footage} footage, {folders} folders");

    for (item_id, comp) in project.compositions() {
        let name = project
            .item_by_id(item_id)
            .map_or("", |item| item.name.as_str());
        println!(
            "  comp {item_id} '{name}' {}x{} @ {} fps, {:.3}s, {} layers",
            comp.width,
            comp.height,
            comp.frame_rate,
            comp.duration,
            comp.layers.len(),
        );
    }

    for warning in &project.warnings {
        eprintln!("warning: {warning}");
    }
    Ok(())
}

fn cmd_dump(args: DumpArgs) -> anyhow::Result<()> {
    let project = load_project(&args.in_path)?;
    let json = if args.pretty {
        serde_json::to_string_pretty(&project)?
    } else {
        serde_json::to_string(&project)?
    };
    println!("{json}");
    Ok(())
}

fn cmd_queue(args: QueueArgs) -> anyhow::Result<()> {
    let project = load_project(&args.in_path)?;
    let project_name = args
        .in_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned());

    if project.render_queue.items.is_empty() {
        println!("render queue is empty");
        return Ok(());
    }

    for (index, item) in project.render_queue.items.iter().enumerate() {
        let comp_name = project
            .item_by_id(item.comp_id)
            .map_or("?", |comp| comp.name.as_str());
        let enabled = if item.render { "on" } else { "off" };
        println!(
            "item {} [{enabled}] comp '{comp_name}' template '{}'",
            index + 1,
            item.template_name,
        );
        for module in &item.output_modules {
            let resolved =
                aep::resolve_output_file(&project, project_name.as_deref(), item, module);
            match resolved.or_else(|| module.file_template.clone()) {
                Some(path) => println!("  -> {} ({path})", module.name),
                None => println!("  -> {} (no destination set)", module.name),
            }
        }
    }
    Ok(())
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let project = load_project(&args.in_path)?;
    for warning in &project.warnings {
        println!("warning: {warning}");
    }
    println!(
        "ok: {} items, {} render queue items, {} warnings",
        project.items.len(),
        project.render_queue.items.len(),
        project.warnings.len(),
    );
    Ok(())
}

fn cmd_compare(args: CompareArgs) -> anyhow::Result<()> {
    let a = load_chunk_tree(&args.a)?;
    let b = load_chunk_tree(&args.b)?;

    let mut diffs = Vec::new();
    diff_children(&a.chunks, &b.chunks, "root", &mut diffs);
    if a.xmp != b.xmp {
        diffs.push("root: XMP packets differ".to_owned());
    }

    for diff in &diffs {
        println!("{diff}");
    }
    if diffs.is_empty() {
        println!("identical chunk trees");
        Ok(())
    } else {
        anyhow::bail!("{} difference(s)", diffs.len())
    }
}

fn diff_children(a: &[aep::Chunk], b: &[aep::Chunk], path: &str, diffs: &mut Vec<String>) {
    if a.len() != b.len() {
        diffs.push(format!(
            "{path}: {} vs {} child chunks",
            a.len(),
            b.len()
        ));
    }
    for (left, right) in a.iter().zip(b) {
        diff_chunk(left, right, path, diffs);
    }
}

fn diff_chunk(a: &aep::Chunk, b: &aep::Chunk, path: &str, diffs: &mut Vec<String>) {
    let path = format!("{path}/{}", a.label());
    if a.label() != b.label() {
        diffs.push(format!("{path}: tag differs ({} vs {})", a.label(), b.label()));
        return;
    }
    match (&a.data, &b.data) {
        (
            aep::ChunkData::List { children: ca, .. },
            aep::ChunkData::List { children: cb, .. },
        ) => diff_children(ca, cb, &path, diffs),
        (aep::ChunkData::Bytes(ba), aep::ChunkData::Bytes(bb))
        | (aep::ChunkData::Blob { bytes: ba, .. }, aep::ChunkData::Blob { bytes: bb, .. }) => {
            if ba != bb {
                diffs.push(format!(
                    "{path}: payload differs ({} vs {} bytes)",
                    ba.len(),
                    bb.len()
                ));
            }
        }
        _ => diffs.push(format!("{path}: leaf vs container")),
    }
}

fn cmd_visualize(args: VisualizeArgs) -> anyhow::Result<()> {
    let rifx = load_chunk_tree(&args.in_path)?;
    for chunk in &rifx.chunks {
        print_chunk(chunk, 0);
    }
    if let Some(xmp) = &rifx.xmp {
        println!("xmp         {} bytes", xmp.len());
    }
    Ok(())
}

fn print_chunk(chunk: &aep::Chunk, depth: usize) {
    let indent = "  ".repeat(depth);
    match &chunk.data {
        aep::ChunkData::List { children, .. } => {
            println!(
                "{:#010x}  {indent}{} ({} children)",
                chunk.offset,
                chunk.label(),
                children.len(),
            );
            for child in children {
                print_chunk(child, depth + 1);
            }
        }
        aep::ChunkData::Blob { bytes, .. } => {
            println!(
                "{:#010x}  {indent}{} ({} bytes, opaque)",
                chunk.offset,
                chunk.label(),
                bytes.len(),
            );
        }
        aep::ChunkData::Bytes(bytes) => {
            println!(
                "{:#010x}  {indent}{} ({} bytes)",
                chunk.offset,
                chunk.label(),
                bytes.len(),
            );
        }
    }
}
