use cadastro::{cnpj, cpf};

fn main() {
    // CPF validation, masked and unmasked input both accepted
    println!("=== CPF Validation ===\n");

    let test_cpfs = [
        "529.982.247-25",
        "52998224725",
        "529.982.247-24", // wrong check digit
        "111.111.111-11", // repeated digits
        "12345",          // wrong length
    ];

    for doc in &test_cpfs {
        println!("  {doc} => valid={}", cpf::validate(doc));
    }

    // CNPJ validation
    println!("\n=== CNPJ Validation ===\n");

    let test_cnpjs = [
        "11.222.333/0001-81",
        "11222333000181",
        "11.222.333/0001-80", // wrong check digit
    ];

    for doc in &test_cnpjs {
        println!("  {doc} => valid={}", cnpj::validate(doc));
    }

    // Masking
    println!("\n=== Masking ===\n");

    for input in ["52998224725", "11222333000181", "1234"] {
        match cpf::mask(input) {
            Ok(masked) => println!("  {input} => {masked}"),
            Err(e) => println!("  {input} => ERROR: {e}"),
        }
    }

    // Incremental format checks, as an input field would run them
    println!("\n=== Incremental Format ===\n");

    for partial in ["5", "529.", "529.982", "529.982.247-25", "5x9"] {
        println!(
            "  {partial:?} => acceptable={}",
            cpf::is_valid_format(partial)
        );
    }

    // Generation
    println!("\n=== Generation ===\n");

    let generated_cpf = cpf::generate();
    let generated_cnpj = cnpj::generate();
    println!(
        "  CPF  {} (valid={})",
        cpf::mask(&generated_cpf).unwrap(),
        cpf::validate(&generated_cpf)
    );
    println!(
        "  CNPJ {} (valid={})",
        cnpj::mask(&generated_cnpj).unwrap(),
        cnpj::validate(&generated_cnpj)
    );
}
