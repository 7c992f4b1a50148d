//! Generates the Grafeas message types from the definitions under `proto/`.

fn main() {
    println!("cargo:rerun-if-changed=proto");

    protobuf_codegen::Codegen::new()
        // Pure-Rust parser, no protoc required
        .pure()
        .include("proto")
        .inputs([
            "proto/intoto_statement.proto",
            "proto/slsa_provenance_zero_two.proto",
            "proto/severity.proto",
            "proto/compliance.proto",
        ])
        .cargo_out_dir("grafeas")
        .run_from_script();
}
