use clap::Args;

#[derive(Args, Debug)]
pub struct LengthArgs {
    #[arg(allow_negative_numbers = true)]
    pub x: f32,
    #[arg(allow_negative_numbers = true)]
    pub y: f32,
    #[arg(allow_negative_numbers = true)]
    pub z: f32,
}

pub fn execute(args: LengthArgs) -> anyhow::Result<()> {
    println!("{}", samplelibrary::vector_length(args.x, args.y, args.z));
    Ok(())
}
