use clap::Args;

#[derive(Args, Debug)]
pub struct AddArgs {
    #[arg(allow_negative_numbers = true)]
    pub a: i32,
    #[arg(allow_negative_numbers = true)]
    pub b: i32,
}

#[derive(Args, Debug)]
pub struct MultiplyArgs {
    #[arg(allow_negative_numbers = true)]
    pub a: i32,
    #[arg(allow_negative_numbers = true)]
    pub b: i32,
}

pub fn execute_add(args: AddArgs) -> anyhow::Result<()> {
    println!("{}", samplelibrary::add(args.a, args.b));
    Ok(())
}

pub fn execute_multiply(args: MultiplyArgs) -> anyhow::Result<()> {
    println!("{}", samplelibrary::multiply(args.a, args.b));
    Ok(())
}
