//! J-- Compiler Driver
//!
//! Main entry point of the code generator. Reads a typed program (JSON, as
//! produced by semantic analysis), lowers it to IR and emits Jasmin assembly.

use clap::{Parser, Subcommand};
use jmm_backend::{generate_jasmin, EmitOptions};
use jmm_frontend::{build_symbol_table, Frontend, LoweringOptions, TypedProgram};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "jmmc")]
#[command(about = "J-- code generator")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile a typed program to Jasmin assembly
    Compile {
        /// Typed program in JSON form
        input: PathBuf,

        /// Output assembly file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print IR to stdout before emission
        #[arg(long)]
        print_ir: bool,

        /// Save IR to file with .ollir extension
        #[arg(long)]
        save_ir: bool,

        /// Specify output path for IR file (used with --save-ir)
        #[arg(long)]
        ir_output: Option<PathBuf>,

        /// Print the IR model as JSON to stdout
        #[arg(long)]
        dump_ir_json: bool,
    },
}

/// What to produce besides the assembly file
struct CompileRequest<'a> {
    input: &'a Path,
    output: Option<&'a Path>,
    print_ir: bool,
    save_ir: bool,
    ir_output: Option<&'a Path>,
    dump_ir_json: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Compile { input, output, print_ir, save_ir, ir_output, dump_ir_json } => {
            let request = CompileRequest {
                input: &input,
                output: output.as_deref(),
                print_ir,
                save_ir,
                ir_output: ir_output.as_deref(),
                dump_ir_json,
            };
            if let Err(e) = compile_file(&request) {
                eprintln!("Error compiling {}: {}", input.display(), e);
                std::process::exit(1);
            }
        }
    }
}

fn compile_file(request: &CompileRequest) -> Result<PathBuf, Box<dyn std::error::Error>> {
    info!("Compiling typed program: {}", request.input.display());

    let source = fs::read_to_string(request.input)?;
    let program = TypedProgram::from_json(&source)?;
    let symbols = build_symbol_table(&program);

    let unit = Frontend::lower_program(&program, &symbols, LoweringOptions::default())?;
    let ir_text = unit.to_string();

    if request.print_ir {
        println!("=== IR Output ===");
        println!("{ir_text}");
        println!("=== End IR ===");
    }

    if request.save_ir {
        let ir_path = request
            .ir_output
            .map(Path::to_path_buf)
            .unwrap_or_else(|| request.input.with_extension("ollir"));
        fs::write(&ir_path, format!("{ir_text}\n"))?;
        println!("IR saved to: {}", ir_path.display());
    }

    if request.dump_ir_json {
        println!("{}", serde_json::to_string_pretty(&unit)?);
    }

    let asm = generate_jasmin(&unit, &EmitOptions::default())?;
    let output_path = request
        .output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| request.input.with_extension("j"));
    fs::write(&output_path, asm)?;
    println!("Assembly written to: {}", output_path.display());

    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROGRAM: &str = r#"{
      "imports": [["io"]],
      "class": {
        "name": "Hello",
        "methods": [
          {
            "name": "main",
            "is_static": true,
            "return_type": { "name": "void", "is_array": false },
            "parameters": [{ "name": "args", "type": { "name": "String", "is_array": true } }],
            "body": [
              {
                "kind": "Expression",
                "expr": {
                  "kind": "MethodCall",
                  "receiver": { "kind": "Identifier", "name": "io", "expr_type": { "name": "io", "is_array": false } },
                  "method": "println",
                  "arguments": [{ "kind": "IntLiteral", "value": 42 }],
                  "expr_type": { "name": "void", "is_array": false }
                }
              }
            ]
          }
        ]
      }
    }"#;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("jmmc-{name}-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn request(input: &Path) -> CompileRequest<'_> {
        CompileRequest {
            input,
            output: None,
            print_ir: false,
            save_ir: true,
            ir_output: None,
            dump_ir_json: false,
        }
    }

    #[test]
    fn test_compile_writes_next_to_input() {
        let dir = scratch_dir("default");
        let input = dir.join("Hello.json");
        fs::write(&input, PROGRAM).unwrap();

        let output = compile_file(&request(&input)).unwrap();
        assert_eq!(output, dir.join("Hello.j"));

        let asm = fs::read_to_string(&output).unwrap();
        assert!(asm.starts_with(".class public Hello\n.super java/lang/Object\n"));
        assert!(asm.contains("    bipush 42\n    invokestatic io/println(I)V\n"));

        let ir = fs::read_to_string(dir.join("Hello.ollir")).unwrap();
        assert!(ir.contains("invokestatic(io, \"println\", 42.i32).V;"));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_input_fails() {
        let dir = scratch_dir("missing");
        let result = compile_file(&request(&dir.join("absent.json")));
        assert!(result.is_err());
        fs::remove_dir_all(&dir).unwrap();
    }
}
