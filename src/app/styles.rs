pub const GAME_STYLES: &str = "
                .board-area {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 15px;
                    width: 100%;
                    padding: 0 20px 20px;
                    box-sizing: border-box;
                }

                .controls-area {
                    display: flex;
                    flex-direction: column;
                    gap: 15px;
                    width: 90%;
                    max-width: 420px;
                    margin: 0 auto 20px;
                    padding: 20px;
                    background: #2a2a2a;
                    border-radius: 12px;
                    box-shadow: 0 4px 6px rgba(0,0,0,0.2);
                    border: 1px solid #444;
                    box-sizing: border-box;
                }

                .status-row {
                    display: flex;
                    justify-content: space-between;
                    gap: 15px;
                    width: 100%;
                }

                .status-item {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 5px;
                    flex: 1;
                }

                .status-label {
                    font-size: 0.85em;
                    color: #aaa;
                }

                .status-value {
                    color: #f0d9b5;
                    font-weight: bold;
                    font-size: 18px;
                }

                .status-value.timer {
                    font-family: monospace;
                }

                button.control-btn {
                    width: 100%;
                    padding: 10px 14px;
                    border-radius: 8px;
                    border: 1px solid #555;
                    background: #3a3a3a;
                    color: #eee;
                    font-size: 14px;
                    cursor: pointer;
                    transition: all 0.2s ease;
                    outline: none;
                    font-family: inherit;
                    box-sizing: border-box;
                }

                button.control-btn:hover {
                    background: #4a4a4a;
                    border-color: #777;
                    transform: translateY(-1px);
                    box-shadow: 0 2px 4px rgba(0,0,0,0.2);
                }

                button.control-btn:focus {
                    border-color: #a8e6cf;
                    box-shadow: 0 0 0 2px rgba(168, 230, 207, 0.2);
                }

                button.btn-primary {
                    background: #4CAF50;
                    color: white;
                    border: none;
                }
                button.btn-primary:hover {
                    background: #45a049;
                }
                button.btn-primary:disabled {
                    background: #555;
                    color: #999;
                    cursor: default;
                    transform: none;
                    box-shadow: none;
                }

                .card {
                    perspective: 600px;
                    cursor: pointer;
                    user-select: none;
                }

                .card.matched {
                    cursor: default;
                }

                .card-inner {
                    position: relative;
                    width: 100%;
                    height: 100%;
                    transition: transform 0.4s ease;
                    transform-style: preserve-3d;
                }

                .card.is-flipped .card-inner {
                    transform: rotateY(180deg);
                }

                .card-face {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    justify-content: center;
                    align-items: center;
                    border-radius: 8px;
                    backface-visibility: hidden;
                    -webkit-backface-visibility: hidden;
                }

                .card-back {
                    background: #3a3a3a;
                    color: #f0d9b5;
                    border: 1px solid #555;
                    font-weight: bold;
                }

                .card-back:hover {
                    background: #4a4a4a;
                    border-color: #777;
                }

                .card-front {
                    background: #f0d9b5;
                    border: 1px solid #5c3a1e;
                    transform: rotateY(180deg);
                }

                .card.matched .card-front {
                    background: #a8e6cf;
                    border-color: #4CAF50;
                }

                .game-message {
                    color: #a8e6cf;
                    font-weight: bold;
                    font-size: 22px;
                    height: 28px;
                    text-align: center;
                    animation: pulse 1.5s infinite;
                }

                @keyframes pulse {
                    0% { opacity: 0.6; }
                    50% { opacity: 1; }
                    100% { opacity: 0.6; }
                }

                @media (max-width: 480px) {
                    .controls-area {
                        padding: 15px;
                    }
                }
";
