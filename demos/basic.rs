use meet_uri::parse_location_uri;

fn main() {
    // Parse a location pasted from an invite
    let input = "https://meet.example.com:8443/team/Standup?jwt=abc#config.startWithAudioMuted=true";
    let uri = parse_location_uri(Some(input)).expect("string input always parses");

    println!("Href: {}", uri.href()); // https://meet.example.com:8443/team/Standup?jwt=abc#config.startWithAudioMuted=true
    println!("Protocol: {:?}", uri.protocol()); // Some("https:")
    println!("Host: {:?}", uri.host()); // Some("meet.example.com:8443")
    println!("Port: {:?}", uri.port()); // Some("8443")
    println!("Pathname: {}", uri.pathname()); // /team/Standup
    println!("Search: {}", uri.search()); // ?jwt=abc
    println!("Hash: {}", uri.hash()); // #config.startWithAudioMuted=true
    println!("Context root: {}", uri.context_root()); // /team/
    println!("Room: {:?}", uri.room()); // Some("Standup")
}
