fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Compile user service proto (protox is a pure-Rust protoc replacement,
    // so no system `protoc` binary is required)
    let fds = protox::compile(["proto/user.proto"], ["proto/"])?;
    tonic_build::configure()
        .build_server(true)
        .build_client(true)
        .compile_fds(fds)?;

    Ok(())
}
