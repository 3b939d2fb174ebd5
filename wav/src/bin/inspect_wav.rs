use std::io::Read;

fn main() {
    let mut data = Vec::new();
    std::io::stdin().read_to_end(&mut data).unwrap();

    let pcm = wav::PcmData::read(&data).unwrap();
    println!("sample rate: {} hz", pcm.sample_rate);
    println!("channels: {}", pcm.channels);
    println!("bits per sample: {}", pcm.bits_per_sample);
    println!("payload: {} bytes", pcm.samples.len());
    println!("audio length: {:?}", pcm.audio_length());
}
