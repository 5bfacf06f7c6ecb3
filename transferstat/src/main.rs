fn main() -> anyhow::Result<()> {
    transferstat::run()
}
