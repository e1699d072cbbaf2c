use logiclite::{parse_document, Fact, KnowledgeSink, ReasoningEngine, ResolutionEngine};

const KB: &str = "
    man(socrates).
    mortal(?x) :- man(?x).
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();

    let doc = parse_document(KB)?;

    // 1) forward chain
    let mut fwd = ReasoningEngine::new();
    fwd.add_knowledge_base(doc.statements.clone());
    let derived = fwd.infer()?;

    // 2) refutation, without materializing anything
    let mut res = ResolutionEngine::new();
    res.add_knowledge_base(&doc.statements);

    let socrates = Fact::pos("mortal", &["socrates"])?;
    let plato = Fact::pos("mortal", &["plato"])?;

    println!("Derived {derived} facts.");
    println!("Forward: Socrates mortal? {}", fwd.query(&socrates));
    println!("Resolution: Socrates mortal? {}", res.resolution(&socrates)?);
    println!("Resolution: Plato mortal? {}", res.resolution(&plato)?);

    Ok(())
}
