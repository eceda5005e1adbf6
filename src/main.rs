fn main() -> anyhow::Result<()> {
    log_filter::run()
}
