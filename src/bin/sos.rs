//! Picks the example options out of its own arguments and prints them.
//!
//! Try `RUST_LOG=debug sos -a A --b=B -c -d --e -t NAME VALUE X Y Z`.

use sos::TokenSequence;

fn main() {
    env_logger::init();

    let (args, prog) = TokenSequence::from_env().pop();
    let (args, a) = args.arg("a");
    let (args, b) = args.flag("b");
    let (args, b_arg) = if b {
        (args, String::new())
    } else {
        args.arg("b")
    };
    let (args, c) = args.flag("c");
    let (args, c_arg) = if c {
        (args, String::new())
    } else {
        args.arg("c")
    };
    let (args, d) = args.flag("d");
    let (args, e) = args.flag("e");
    let (args, f) = args.flag("f");
    let (args, t_name, t_value) = args.ternary("t");

    println!("prog   = {prog:?}");
    println!("a      = {a:?}");
    println!("b      = {b} ({b_arg:?})");
    println!("c      = {c} ({c_arg:?})");
    println!("d      = {d}");
    println!("e      = {e}");
    println!("f      = {f}");
    println!("t      = ({t_name:?}, {t_value:?})");
    println!("rest   = [{}]", args.join(", "));
}
