fn main() -> anyhow::Result<()> {
    vocab_flashcards_terminal::run()
}
