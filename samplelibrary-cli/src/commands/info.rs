use clap::Args;
use samplelibrary::transfer;

#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute_curl_version() -> anyhow::Result<()> {
    println!("{}", transfer::current_version()?);
    Ok(())
}

pub fn execute(args: InfoArgs) -> anyhow::Result<()> {
    let info = transfer::info();

    if args.json {
        let value = serde_json::json!({
            "version": samplelibrary::VERSION,
            "transfer": info,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("samplelibrary {}", samplelibrary::VERSION);
    println!("libcurl:      {}", info.version);
    println!("host:         {}", info.host);
    println!(
        "ssl:          {}",
        info.ssl_version.as_deref().unwrap_or("none")
    );
    println!(
        "libz:         {}",
        info.libz_version.as_deref().unwrap_or("none")
    );
    println!("features:     {}", info.features.join(", "));
    println!("protocols:    {}", info.protocols.join(", "));
    Ok(())
}
