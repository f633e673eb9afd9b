mod tables;

pub use self::tables::{key as print_key_table, score_details as print_score_details};

pub fn print_preview(preview: &str) {
    println!("\n[+] Normalized ciphertext (lowercase, no accents):");
    println!("{}", preview);
}

pub fn print_plaintext(plaintext: &str) {
    println!("\n================ RESULT ================\n");
    println!("{}", plaintext);
}
