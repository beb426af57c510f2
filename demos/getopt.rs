use shortopt::getopt_env;

// Try: cargo run --example getopt -- -vv -n 3 -o out.txt -- -r input.txt
fn main() {
    let parsed = match getopt_env("v+n#o:r.") {
        Ok(parsed) => parsed,
        Err(error) => {
            eprintln!("Parse error: {error}");
            std::process::exit(1);
        }
    };

    println!("verbosity: {}", parsed.count('v'));

    if let Some(number) = parsed.get('n') {
        println!("number: {}", number.int);
    }

    if let Some(output) = parsed.get('o') {
        println!("output: {}", output.value);
    }

    if let Some(ratio) = parsed.get('r') {
        println!("ratio: {}", ratio.float);
    }

    println!("remaining: {:?}", parsed.remaining());
}
